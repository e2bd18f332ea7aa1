//! `sustaingo`: terminal admin console for the SustainGo marketplace.

#![allow(clippy::exit)]

mod cli;
mod commands;
mod context;
mod credentials;
mod output;
mod timing;

use anyhow::Result;
use clap::Parser as _;
use sustaingo_business::resources::{AdminUser, Bag, Ngo, Reservation, Review, Vendor};

use crate::cli::{
    BagsCommand, Cli, Commands, NgosCommand, ReservationsCommand, ReviewsCommand, UsersCommand,
    VendorsCommand,
};
use crate::commands::resources::{run_action, run_list};
use crate::context::CliContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    // Completions need no config, session, or network.
    if let Commands::Completions { shell } = cli.command {
        commands::generate_completions(shell);
        return Ok(());
    }

    let mut ctx = CliContext::initialize(&cli)?;

    match cli.command {
        Commands::Login { email } => commands::run_login(&mut ctx, email).await,
        Commands::Logout => commands::run_logout(&mut ctx),
        Commands::Register => commands::run_register(&mut ctx).await,
        Commands::Users { command } => match command {
            UsersCommand::List {
                filter,
                interactive,
            } => run_list::<AdminUser>(&mut ctx, filter, interactive).await,
            UsersCommand::Toggle { id } => {
                run_action::<AdminUser>(&mut ctx, "toggle-active", &id.to_string(), true).await
            }
            UsersCommand::Delete { id, yes } => {
                run_action::<AdminUser>(&mut ctx, "delete", &id.to_string(), yes).await
            }
        },
        Commands::Vendors { command } => match command {
            VendorsCommand::List {
                filter,
                interactive,
            } => run_list::<Vendor>(&mut ctx, filter, interactive).await,
            VendorsCommand::Delete { id, yes } => {
                run_action::<Vendor>(&mut ctx, "delete", &id.to_string(), yes).await
            }
        },
        Commands::Ngos { command } => match command {
            NgosCommand::List {
                filter,
                interactive,
            } => run_list::<Ngo>(&mut ctx, filter, interactive).await,
            NgosCommand::Delete { email, yes } => {
                run_action::<Ngo>(&mut ctx, "delete", &email, yes).await
            }
        },
        Commands::Bags { command } => match command {
            BagsCommand::List {
                filter,
                interactive,
            } => run_list::<Bag>(&mut ctx, filter, interactive).await,
            BagsCommand::Toggle { id } => {
                run_action::<Bag>(&mut ctx, "toggle-active", &id.to_string(), true).await
            }
            BagsCommand::Delete { id, yes } => {
                run_action::<Bag>(&mut ctx, "delete", &id.to_string(), yes).await
            }
        },
        Commands::Reservations { command } => match command {
            ReservationsCommand::List {
                filter,
                interactive,
            } => run_list::<Reservation>(&mut ctx, filter, interactive).await,
            ReservationsCommand::Collect { id } => {
                run_action::<Reservation>(&mut ctx, "mark-collected", &id.to_string(), true).await
            }
            ReservationsCommand::Delete { id, yes } => {
                run_action::<Reservation>(&mut ctx, "delete", &id.to_string(), yes).await
            }
        },
        Commands::Reviews { command } => match command {
            ReviewsCommand::List {
                filter,
                interactive,
            } => run_list::<Review>(&mut ctx, filter, interactive).await,
            ReviewsCommand::Delete { id, yes } => {
                run_action::<Review>(&mut ctx, "delete", &id.to_string(), yes).await
            }
        },
        Commands::Dashboard => commands::run_dashboard(&mut ctx).await,
        Commands::Analytics { target } => commands::run_analytics(&mut ctx, target).await,
        Commands::Completions { .. } => Ok(()),
    }
}
