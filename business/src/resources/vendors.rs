//! Vendors as `/vendors/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// One row of the vendor list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
    /// Absolute logo URL, empty when none was uploaded.
    pub logo: String,
    pub image_url: String,
    pub total_reviews: i64,
    pub average_rating: f64,
    pub delivery_time_minutes: i64,
    /// Not part of the list serializer today. The console still shows a
    /// column for it, so keep the slot open.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub delivery_available: Option<bool>,
}

impl Vendor {
    /// `Yes`/`No` delivery column, `No` when the field is absent.
    pub fn delivery_label(&self) -> &'static str {
        if self.delivery_available.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        }
    }
}

fn delete_path(id: &str) -> String {
    format!("/admin/vendor/{id}/delete/")
}

fn delete_prompt(_id: &str) -> String {
    "Are you sure you want to delete this vendor?".to_owned()
}

static ACTIONS: [RowAction; 1] = [RowAction {
    name: "delete",
    method: Method::Delete,
    path: delete_path,
    confirm: Some(delete_prompt),
    failure: "Failed to delete vendor.",
}];

impl AdminResource for Vendor {
    const NAME: &'static str = "vendors";
    const LIST_PATH: &'static str = "/vendors/";
    const LOAD_FAILURE: &'static str = "Error loading vendors.";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn filter_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
