//! NGO rows. NGOs are keyed by email, so action paths and interactive
//! selection carry the email where other resources carry a numeric id.

use sustaingo_business::resources::{Ngo, RowAction};
use tabled::Tabled;

use super::{ConsoleResource, dash, truncate_str};

#[derive(Tabled)]
pub struct NgoRow {
    #[tabled(rename = "Organization")]
    organization: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Website")]
    website: String,
}

impl ConsoleResource for Ngo {
    const SINGULAR: &'static str = "NGO";

    type Row = NgoRow;

    fn row(&self) -> NgoRow {
        NgoRow {
            organization: truncate_str(&self.organization_name, 24),
            region: self.region.clone(),
            email: self.email.clone(),
            phone: self.phone_number.clone(),
            website: dash(self.website.as_deref()),
        }
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.organization_name, self.region)
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
