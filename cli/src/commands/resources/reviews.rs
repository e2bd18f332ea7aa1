//! Review rows.

use sustaingo_business::resources::{Review, RowAction};
use tabled::Tabled;

use super::{ConsoleResource, dash, date_part, truncate_str};

#[derive(Tabled)]
pub struct ReviewRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "User")]
    user: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Comment")]
    comment: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl ConsoleResource for Review {
    const SINGULAR: &'static str = "review";

    type Row = ReviewRow;

    fn row(&self) -> ReviewRow {
        ReviewRow {
            id: self.id,
            user: self.user_name.clone(),
            vendor: dash(self.vendor_name()),
            rating: format!("{}/5", self.rating),
            comment: truncate_str(&self.comment, 32),
            created: date_part(&self.created_at).to_owned(),
        }
    }

    fn summary(&self) -> String {
        format!("{}/5 by {}", self.rating, self.user_name)
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
