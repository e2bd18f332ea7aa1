//! NGO profiles as `/public_ngos/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// One row of the NGO list.
///
/// NGO rows carry no numeric id; the admin endpoints key them by the email
/// of the owning account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ngo {
    pub organization_name: String,
    pub region: String,
    pub description: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub website: Option<String>,
    pub logo: Option<String>,
}

fn delete_path(email: &str) -> String {
    format!("/admin/ngo/{email}/delete/")
}

fn delete_prompt(email: &str) -> String {
    format!("Delete NGO with email: {email}?")
}

static ACTIONS: [RowAction; 1] = [RowAction {
    name: "delete",
    method: Method::Delete,
    path: delete_path,
    confirm: Some(delete_prompt),
    failure: "Failed to delete NGO.",
}];

impl AdminResource for Ngo {
    const NAME: &'static str = "NGOs";
    const LIST_PATH: &'static str = "/public_ngos/";
    const LOAD_FAILURE: &'static str = "Error loading NGOs.";

    fn id(&self) -> String {
        self.email.clone()
    }

    fn filter_key(&self) -> Option<&str> {
        Some(&self.organization_name)
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
