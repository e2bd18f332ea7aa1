//! Mystery bag rows.

use sustaingo_business::resources::{Bag, RowAction};
use tabled::Tabled;

use super::{ConsoleResource, dash, truncate_str};

#[derive(Tabled)]
pub struct BagRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Donation")]
    donation: &'static str,
    #[tabled(rename = "Pickup")]
    pickup: String,
    #[tabled(rename = "Delivery")]
    delivery: &'static str,
    #[tabled(rename = "Expires")]
    expires: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

impl ConsoleResource for Bag {
    const SINGULAR: &'static str = "bag";

    type Row = BagRow;

    fn row(&self) -> BagRow {
        BagRow {
            id: self.id,
            title: truncate_str(&self.title, 24),
            vendor: dash(self.vendor_name()),
            quantity: self.quantity_available,
            price: self.price.clone(),
            donation: if self.is_donation { "Yes" } else { "No" },
            pickup: format!("{} to {}", self.pickup_start, self.pickup_end),
            delivery: self.delivery_label(),
            expires: dash(self.expiry_date.as_deref()),
            status: self.status_label(),
        }
    }

    fn summary(&self) -> String {
        match self.vendor_name() {
            Some(vendor) => format!("{} by {} ({})", self.title, vendor, self.status_label()),
            None => format!("{} ({})", self.title, self.status_label()),
        }
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "toggle-active" => self.toggle_label().to_owned(),
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
