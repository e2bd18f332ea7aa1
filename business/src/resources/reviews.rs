//! Reviews as `/admin/reviews/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// Vendor embedded in a review row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewVendor {
    pub name: String,
}

/// One row of the review list, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    /// Reviewer display name, falling back to "Customer" server-side.
    pub user_name: String,
    /// 1 to 5.
    pub rating: i64,
    pub comment: String,
    pub created_at: String,
    /// The list serializer does not embed the vendor today; the filter
    /// matches nothing until it does.
    #[serde(default)]
    pub vendor: Option<ReviewVendor>,
}

impl Review {
    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor.as_ref().map(|vendor| vendor.name.as_str())
    }
}

fn delete_path(id: &str) -> String {
    format!("/admin/review/{id}/delete/")
}

fn delete_prompt(_id: &str) -> String {
    "Are you sure you want to delete this review?".to_owned()
}

static ACTIONS: [RowAction; 1] = [RowAction {
    name: "delete",
    method: Method::Delete,
    path: delete_path,
    confirm: Some(delete_prompt),
    failure: "Failed to delete review.",
}];

impl AdminResource for Review {
    const NAME: &'static str = "reviews";
    const LIST_PATH: &'static str = "/admin/reviews/";
    const LOAD_FAILURE: &'static str = "Error loading reviews.";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn filter_key(&self) -> Option<&str> {
        self.vendor_name()
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
