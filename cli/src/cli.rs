//! Command-line surface of the admin console.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "sustaingo")]
#[command(about = "Admin console for the SustainGo surplus-food marketplace", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (the `/api` prefix is appended)
    #[arg(long, global = true, env = "SUSTAINGO_API_URL")]
    pub api_url: Option<String>,

    /// Call analytics endpoints without the stored credential
    #[arg(long, global = true)]
    pub public_analytics: bool,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in with an admin account
    Login {
        /// Account email; prompted for when omitted
        #[arg(long)]
        email: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Register an account and create its vendor/NGO profile
    Register,
    /// Manage user accounts
    Users {
        #[command(subcommand)]
        command: UsersCommand,
    },
    /// Manage vendors
    Vendors {
        #[command(subcommand)]
        command: VendorsCommand,
    },
    /// Manage NGOs
    Ngos {
        #[command(subcommand)]
        command: NgosCommand,
    },
    /// Manage mystery bags
    Bags {
        #[command(subcommand)]
        command: BagsCommand,
    },
    /// Manage reservations
    Reservations {
        #[command(subcommand)]
        command: ReservationsCommand,
    },
    /// Manage reviews
    Reviews {
        #[command(subcommand)]
        command: ReviewsCommand,
    },
    /// Show the admin dashboard counts
    Dashboard,
    /// Show an analytics report
    Analytics {
        #[arg(value_enum)]
        target: AnalyticsTarget,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List user accounts
    List {
        /// Keep only rows whose email contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Block or unblock a user
    Toggle {
        /// User id
        id: i64,
    },
    /// Delete a user
    Delete {
        /// User id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum VendorsCommand {
    /// List vendors
    List {
        /// Keep only rows whose name contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Delete a vendor
    Delete {
        /// Vendor id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum NgosCommand {
    /// List NGOs
    List {
        /// Keep only rows whose organization name contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Delete an NGO
    Delete {
        /// NGO email (NGOs are keyed by email, not id)
        email: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum BagsCommand {
    /// List mystery bags
    List {
        /// Keep only rows whose title contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Activate or deactivate a bag
    Toggle {
        /// Bag id
        id: i64,
    },
    /// Delete a bag
    Delete {
        /// Bag id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ReservationsCommand {
    /// List reservations
    List {
        /// Keep only rows whose vendor name contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Mark a reservation as collected
    Collect {
        /// Reservation id
        id: i64,
    },
    /// Delete a reservation
    Delete {
        /// Reservation id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// List reviews
    List {
        /// Keep only rows whose vendor name contains this text
        #[arg(long, short = 'f')]
        filter: Option<String>,

        /// Interactive mode (select a row, then an action)
        #[arg(long, short = 'I')]
        interactive: bool,
    },
    /// Delete a review
    Delete {
        /// Review id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Which analytics report to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnalyticsTarget {
    /// Reservation volume per vendor
    Vendors,
    /// Average ratings and review counts per vendor
    Reviews,
    /// Thirty-day reservation trends
    Reservations,
    /// Bag inventory summary
    Bags,
    /// User population summary
    Users,
}
