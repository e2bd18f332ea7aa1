//! User account rows.

use sustaingo_business::resources::{AdminUser, RowAction};
use tabled::Tabled;

use super::{ConsoleResource, date_part};

#[derive(Tabled)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Joined")]
    joined: String,
}

impl ConsoleResource for AdminUser {
    const SINGULAR: &'static str = "user";

    type Row = UserRow;

    fn row(&self) -> UserRow {
        UserRow {
            id: self.id,
            name: self.first_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            status: self.status_label(),
            joined: date_part(&self.date_joined).to_owned(),
        }
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.email, self.status_label())
    }

    fn action_label(&self, action: &RowAction) -> String {
        match action.name {
            "toggle-active" => self.toggle_label().to_owned(),
            "delete" => "Delete".to_owned(),
            other => other.to_owned(),
        }
    }
}
