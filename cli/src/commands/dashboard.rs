//! Admin dashboard command.

use anyhow::Result;
use sustaingo_business::dashboard::{STATS_FAILURE, fetch_dashboard_stats};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::context::CliContext;

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Count")]
    count: i64,
}

#[instrument(skip_all, name = "dashboard")]
pub async fn run_dashboard(ctx: &mut CliContext) -> Result<()> {
    ctx.ensure_authenticated();

    let stats = match fetch_dashboard_stats(&ctx.config, &ctx.session).await {
        Ok(stats) => stats,
        Err(e) => ctx.fail(STATS_FAILURE, &e),
    };

    let rows = [
        StatRow {
            metric: "Total users",
            count: stats.total_users,
        },
        StatRow {
            metric: "Total vendors",
            count: stats.total_vendors,
        },
        StatRow {
            metric: "Total NGOs",
            count: stats.total_ngos,
        },
        StatRow {
            metric: "Total bags",
            count: stats.total_bags,
        },
        StatRow {
            metric: "Donated bags",
            count: stats.donated_bags,
        },
        StatRow {
            metric: "Total reservations",
            count: stats.total_reservations,
        },
    ];

    let mut table = Table::new(&rows);
    table.with(Style::rounded());

    ctx.out.header("SustainGo at a glance");
    ctx.out.print(table.to_string());
    Ok(())
}
