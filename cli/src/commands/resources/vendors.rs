//! Vendor rows.

use sustaingo_business::resources::{RowAction, Vendor};
use tabled::Tabled;

use super::{ConsoleResource, dash, truncate_str};

#[derive(Tabled)]
pub struct VendorRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Reviews")]
    reviews: i64,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Delivery time")]
    delivery_time: String,
    #[tabled(rename = "Delivery")]
    delivery: &'static str,
}

impl ConsoleResource for Vendor {
    const SINGULAR: &'static str = "vendor";

    type Row = VendorRow;

    fn row(&self) -> VendorRow {
        VendorRow {
            id: self.id,
            name: truncate_str(&self.name, 24),
            description: truncate_str(&dash(self.description.as_deref()), 24),
            reviews: self.total_reviews,
            rating: format!("{:.1}", self.average_rating),
            delivery_time: format!("{} min", self.delivery_time_minutes),
            delivery: self.delivery_label(),
        }
    }

    fn summary(&self) -> String {
        format!("{} ({:.1} rating)", self.name, self.average_rating)
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
