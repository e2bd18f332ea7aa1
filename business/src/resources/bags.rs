//! Mystery bags as `/bags/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// Vendor embedded in a bag row. Only the name is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagVendor {
    pub name: String,
}

/// One row of the mystery bag list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bag {
    pub id: i64,
    #[serde(default)]
    pub vendor: Option<BagVendor>,
    pub title: String,
    pub description: String,
    pub quantity_available: i64,
    /// Decimal serialized as a string, e.g. `"5.00"`.
    pub price: String,
    pub is_donation: bool,
    pub pickup_start: String,
    pub pickup_end: String,
    pub date_posted: String,
    pub is_active: bool,
    /// The console renders delivery and expiry columns the serializer does
    /// not send yet.
    #[serde(default)]
    pub delivery: Option<bool>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl Bag {
    /// `Active`/`Inactive` status column.
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Inactive" }
    }

    /// Verb for the toggle action in interactive menus.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_active { "Deactivate" } else { "Activate" }
    }

    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor.as_ref().map(|vendor| vendor.name.as_str())
    }

    /// `Yes`/`No` delivery column, `No` when the field is absent.
    pub fn delivery_label(&self) -> &'static str {
        if self.delivery.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        }
    }
}

fn toggle_path(id: &str) -> String {
    format!("/admin/bag/{id}/toggle-active/")
}

fn delete_path(id: &str) -> String {
    format!("/admin/bag/{id}/delete/")
}

fn delete_prompt(_id: &str) -> String {
    "Are you sure you want to delete this bag?".to_owned()
}

static ACTIONS: [RowAction; 2] = [
    RowAction {
        name: "toggle-active",
        method: Method::Patch,
        path: toggle_path,
        confirm: None,
        failure: "Failed to toggle bag status.",
    },
    RowAction {
        name: "delete",
        method: Method::Delete,
        path: delete_path,
        confirm: Some(delete_prompt),
        failure: "Failed to delete bag.",
    },
];

impl AdminResource for Bag {
    const NAME: &'static str = "mystery bags";
    const LIST_PATH: &'static str = "/bags/";
    const LOAD_FAILURE: &'static str = "Error loading mystery bags.";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn filter_key(&self) -> Option<&str> {
        Some(&self.title)
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
