//! Reservations as `/admin/reservations/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// One row of the reservation list, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// ISO-8601 datetime; only the date part is shown.
    pub reserved_at: String,
    /// Decimal serialized as a string, e.g. `"5.00"`.
    pub price_paid: String,
    pub payment_method: String,
    pub delivery_address: Option<String>,
    pub phone_number: Option<String>,
    pub notes: Option<String>,
    pub is_collected: bool,
    pub bag_title: String,
    pub vendor_name: String,
    pub bag_contents: Option<String>,
    /// `user` or `ngo`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Reservation {
    /// `Collected`/`Pending` status column.
    pub fn status_label(&self) -> &'static str {
        if self.is_collected { "Collected" } else { "Pending" }
    }

    /// The date part of `reserved_at`.
    pub fn reserved_date(&self) -> &str {
        self.reserved_at
            .split_once('T')
            .map_or(self.reserved_at.as_str(), |(date, _)| date)
    }
}

fn collect_path(id: &str) -> String {
    format!("/reservations/{id}/collected/")
}

fn delete_path(id: &str) -> String {
    format!("/admin/reservation/{id}/delete/")
}

fn delete_prompt(_id: &str) -> String {
    "Are you sure you want to delete this reservation?".to_owned()
}

static ACTIONS: [RowAction; 2] = [
    RowAction {
        name: "mark-collected",
        method: Method::Patch,
        path: collect_path,
        confirm: None,
        failure: "Failed to mark as collected.",
    },
    RowAction {
        name: "delete",
        method: Method::Delete,
        path: delete_path,
        confirm: Some(delete_prompt),
        failure: "Failed to delete reservation.",
    },
];

impl AdminResource for Reservation {
    const NAME: &'static str = "reservations";
    const LIST_PATH: &'static str = "/admin/reservations/";
    const LOAD_FAILURE: &'static str = "Error loading reservations.";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn filter_key(&self) -> Option<&str> {
        Some(&self.vendor_name)
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
