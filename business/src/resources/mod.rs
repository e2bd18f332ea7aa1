//! Admin resource catalog.
//!
//! Each managed resource (users, vendors, NGOs, mystery bags, reservations,
//! reviews) is a record type implementing [`AdminResource`]. The trait
//! carries everything the generic [`crate::table::ResourceTable`] controller
//! needs: where the collection lives, how rows are keyed and filtered, and
//! which row actions exist. The per-resource modules hold the record shapes
//! (mirroring the backend serializers) and their declarative action tables.

pub mod bags;
pub mod ngos;
pub mod reservations;
pub mod reviews;
pub mod users;
pub mod vendors;

pub use bags::Bag;
pub use ngos::Ngo;
pub use reservations::Reservation;
pub use reviews::Review;
pub use users::AdminUser;
pub use vendors::Vendor;

use serde::de::DeserializeOwned;

use crate::http::Method;

/// A mutating action available on a single row.
///
/// Actions are data, not code: the controller issues `method` against
/// `path(id)` and, when `confirm` is set, asks for confirmation first.
#[derive(Debug, Clone, Copy)]
pub struct RowAction {
    /// Stable action name, also the CLI verb ("toggle-active", "delete", ...).
    pub name: &'static str,
    /// PATCH or DELETE.
    pub method: Method,
    /// Builds the request path under `/api` from the row id.
    pub path: fn(&str) -> String,
    /// Confirmation prompt, built from the row id. `None` means the action
    /// runs without asking.
    pub confirm: Option<fn(&str) -> String>,
    /// Message shown when the request fails.
    pub failure: &'static str,
}

/// A resource the admin console lists and mutates.
pub trait AdminResource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Plural display name ("users", "mystery bags", ...).
    const NAME: &'static str;
    /// List endpoint path under `/api`.
    const LIST_PATH: &'static str;
    /// Message shown when the list request fails.
    const LOAD_FAILURE: &'static str;

    /// Row key used in action paths. Numeric ids except for NGOs, which the
    /// backend keys by email.
    fn id(&self) -> String;

    /// The field the filter box matches against, when this row has one.
    fn filter_key(&self) -> Option<&str>;

    /// The declarative action table for this resource.
    fn actions() -> &'static [RowAction];

    /// Look up an action by name.
    fn action(name: &str) -> Option<&'static RowAction> {
        Self::actions().iter().find(|action| action.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_lookup_by_name() {
        let action = AdminUser::action("delete").unwrap();
        assert_eq!(action.method, Method::Delete);
        assert!(action.confirm.is_some());

        assert!(AdminUser::action("no-such-action").is_none());
    }

    #[test]
    fn test_every_delete_action_is_confirmed() {
        fn deletes_confirmed<R: AdminResource>() {
            for action in R::actions() {
                if action.method == Method::Delete {
                    assert!(
                        action.confirm.is_some(),
                        "{} delete action must ask first",
                        R::NAME
                    );
                }
            }
        }

        deletes_confirmed::<AdminUser>();
        deletes_confirmed::<Vendor>();
        deletes_confirmed::<Ngo>();
        deletes_confirmed::<Bag>();
        deletes_confirmed::<Reservation>();
        deletes_confirmed::<Review>();
    }
}
