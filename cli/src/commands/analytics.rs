//! Analytics report commands.
//!
//! Each report is a chart on the original dashboard; here every series comes
//! out as a table. The payloads keep their maps in `BTreeMap`s, so rows are
//! already in a stable date or name order.

use std::collections::BTreeMap;

use anyhow::Result;
use sustaingo_business::analytics::{
    fetch_bag_analytics, fetch_reservation_analytics, fetch_review_analytics,
    fetch_user_analytics, fetch_vendor_analytics,
};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::cli::AnalyticsTarget;
use crate::context::CliContext;

const ANALYTICS_FAILURE: &str = "Failed to load analytics.";

#[derive(Tabled)]
struct KeyedCount {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Count")]
    count: i64,
}

fn counts_table(map: &BTreeMap<String, i64>) -> String {
    let rows: Vec<KeyedCount> = map
        .iter()
        .map(|(name, count)| KeyedCount {
            name: name.clone(),
            count: *count,
        })
        .collect();

    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    table.to_string()
}

#[instrument(skip_all, name = "analytics", fields(target = ?target))]
pub async fn run_analytics(ctx: &mut CliContext, target: AnalyticsTarget) -> Result<()> {
    match target {
        AnalyticsTarget::Vendors => {
            let activity = match fetch_vendor_analytics(&ctx.config, &ctx.session).await {
                Ok(activity) => activity,
                Err(e) => ctx.fail(ANALYTICS_FAILURE, &e),
            };

            #[derive(Tabled)]
            struct VendorRow {
                #[tabled(rename = "Vendor")]
                vendor: String,
                #[tabled(rename = "Reservations")]
                reservations: i64,
            }

            let rows: Vec<VendorRow> = activity
                .iter()
                .map(|vendor| VendorRow {
                    vendor: vendor.name.clone(),
                    reservations: vendor.reservations,
                })
                .collect();

            let mut table = Table::new(&rows);
            table.with(Style::rounded());

            ctx.out.header("Reservations per vendor");
            ctx.out.print(table.to_string());
        }
        AnalyticsTarget::Reviews => {
            let reviews = match fetch_review_analytics(&ctx.config, &ctx.session).await {
                Ok(reviews) => reviews,
                Err(e) => ctx.fail(ANALYTICS_FAILURE, &e),
            };

            #[derive(Tabled)]
            struct ReviewRow {
                #[tabled(rename = "Vendor")]
                vendor: String,
                #[tabled(rename = "Avg rating")]
                avg_rating: String,
                #[tabled(rename = "Reviews")]
                reviews: i64,
            }

            let rows: Vec<ReviewRow> = reviews
                .avg_ratings
                .iter()
                .map(|(vendor, avg)| ReviewRow {
                    vendor: vendor.clone(),
                    avg_rating: format!("{avg:.1}"),
                    reviews: reviews.review_counts.get(vendor).copied().unwrap_or(0),
                })
                .collect();

            let mut table = Table::new(&rows);
            table.with(Style::rounded());

            ctx.out.header("Vendor ratings");
            ctx.out.print(table.to_string());
        }
        AnalyticsTarget::Reservations => {
            let reservations = match fetch_reservation_analytics(&ctx.config, &ctx.session).await {
                Ok(reservations) => reservations,
                Err(e) => ctx.fail(ANALYTICS_FAILURE, &e),
            };

            ctx.out.header("Reservations, last 30 days");
            ctx.out.stat("Paid", reservations.paid);
            ctx.out.stat("Unpaid", reservations.unpaid);
            ctx.out
                .stat("Collected", reservations.status_counts.collected);
            ctx.out
                .stat("Not collected", reservations.status_counts.not_collected);
            ctx.out.newline();
            ctx.out.print(counts_table(&reservations.daily_counts));
        }
        AnalyticsTarget::Bags => {
            let bags = match fetch_bag_analytics(&ctx.config, &ctx.session).await {
                Ok(bags) => bags,
                Err(e) => ctx.fail(ANALYTICS_FAILURE, &e),
            };

            ctx.out.header("Mystery bags");
            ctx.out.stat("Active", bags.active);
            ctx.out.stat("Expired", bags.expired);
            ctx.out.newline();
            ctx.out.print(counts_table(&bags.bags_per_vendor));
        }
        AnalyticsTarget::Users => {
            let users = match fetch_user_analytics(&ctx.config, &ctx.session).await {
                Ok(users) => users,
                Err(e) => ctx.fail(ANALYTICS_FAILURE, &e),
            };

            ctx.out.header("Users by role");
            ctx.out.print(counts_table(&users.role_counts));
            ctx.out.newline();
            ctx.out.header("NGOs by region");
            ctx.out.print(counts_table(&users.ngo_regions));
            ctx.out.newline();
            ctx.out.header("New users, last 30 days");
            ctx.out.print(counts_table(&users.new_users));
        }
    }

    Ok(())
}
