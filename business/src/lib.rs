//! Client library for the SustainGo admin console.
//!
//! Talks to the SustainGo backend (Django REST, JWT auth) and implements the
//! authenticated-resource-table pattern the console is built from: an
//! explicit [`session::Session`] guarding every request, the login flow, and
//! one generic [`table::ResourceTable`] controller instantiated per managed
//! resource, plus dashboard statistics and analytics clients. All terminal
//! concerns live in the `sustaingo` binary crate.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod resources;
pub mod session;
pub mod table;

pub use config::AdminConfig;
pub use error::{ApiError, ApiResult};
pub use session::{Credential, Session};
pub use table::{ActionOutcome, AlwaysConfirm, Confirmer, ResourceTable, TableStatus};
