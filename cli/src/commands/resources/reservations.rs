//! Reservation rows.

use sustaingo_business::resources::{Reservation, RowAction};
use tabled::Tabled;

use super::{ConsoleResource, truncate_str};

#[derive(Tabled)]
pub struct ReservationRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Bag")]
    bag: String,
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Reserved")]
    reserved: String,
}

impl ConsoleResource for Reservation {
    const SINGULAR: &'static str = "reservation";

    type Row = ReservationRow;

    fn row(&self) -> ReservationRow {
        ReservationRow {
            id: self.id,
            bag: truncate_str(&self.bag_title, 24),
            vendor: truncate_str(&self.vendor_name, 24),
            price: self.price_paid.clone(),
            payment: self.payment_method.clone(),
            kind: self.kind.clone(),
            status: self.status_label(),
            reserved: self.reserved_date().to_owned(),
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} from {} ({})",
            self.bag_title,
            self.vendor_name,
            self.status_label()
        )
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "mark-collected" => "Mark collected".to_owned(),
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
