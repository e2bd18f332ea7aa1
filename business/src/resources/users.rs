//! User accounts as `/admin/users/` reports them.

use serde::{Deserialize, Serialize};

use super::{AdminResource, RowAction};
use crate::http::Method;

/// One row of the admin user list.
///
/// The backend sends a flat projection of the user model, not the full
/// profile serializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub first_name: String,
    pub email: String,
    /// Empty string for accounts created before roles existed.
    pub role: String,
    pub is_active: bool,
    /// ISO-8601 datetime, kept verbatim.
    pub date_joined: String,
}

impl AdminUser {
    /// `Active` for accounts that may log in, `Blocked` for deactivated ones.
    pub fn status_label(&self) -> &'static str {
        if self.is_active { "Active" } else { "Blocked" }
    }

    /// Verb for the toggle action in interactive menus.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_active { "Block" } else { "Unblock" }
    }
}

fn toggle_path(id: &str) -> String {
    format!("/admin/user/{id}/toggle-active/")
}

fn delete_path(id: &str) -> String {
    format!("/admin/user/{id}/delete/")
}

fn delete_prompt(_id: &str) -> String {
    "Are you sure you want to delete this user?".to_owned()
}

static ACTIONS: [RowAction; 2] = [
    RowAction {
        name: "toggle-active",
        method: Method::Patch,
        path: toggle_path,
        confirm: None,
        failure: "Failed to toggle user",
    },
    RowAction {
        name: "delete",
        method: Method::Delete,
        path: delete_path,
        confirm: Some(delete_prompt),
        failure: "Failed to delete user",
    },
];

impl AdminResource for AdminUser {
    const NAME: &'static str = "users";
    const LIST_PATH: &'static str = "/admin/users/";
    const LOAD_FAILURE: &'static str = "Failed to load users";

    fn id(&self) -> String {
        self.id.to_string()
    }

    fn filter_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn actions() -> &'static [RowAction] {
        &ACTIONS
    }
}
