//! Command implementations for the SustainGo admin CLI.

pub mod analytics;
pub mod completions;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod register;
pub mod resources;

pub use analytics::run_analytics;
pub use completions::generate_completions;
pub use dashboard::run_dashboard;
pub use login::run_login;
pub use logout::run_logout;
pub use register::run_register;
