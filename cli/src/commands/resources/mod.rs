//! Resource table commands.
//!
//! One generic driver covers every managed collection: `run_list` fetches
//! and renders a table (optionally filtered, optionally interactive), and
//! `run_action` executes a row action and re-renders the refreshed table.
//! The per-resource modules only contribute a `Tabled` row projection and
//! the menu labels.

pub mod bags;
pub mod ngos;
pub mod reservations;
pub mod reviews;
pub mod users;
pub mod vendors;

use anyhow::{Context as _, Result};
use inquire::{Confirm, Select};
use sustaingo_business::resources::{AdminResource, RowAction};
use sustaingo_business::{ActionOutcome, AlwaysConfirm, Confirmer, ResourceTable};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::instrument;

use crate::context::CliContext;
use crate::output::Output;

/// What the CLI adds on top of [`AdminResource`]: a table row projection
/// and the wording for interactive menus.
pub trait ConsoleResource: AdminResource {
    /// Singular noun for messages ("user", "mystery bag", ...).
    const SINGULAR: &'static str;

    /// The rendered table row.
    type Row: Tabled;

    fn row(&self) -> Self::Row;

    /// One-line label for the record selection menu.
    fn summary(&self) -> String;

    /// Verb shown for an action in the action menu.
    fn action_label(&self, action: &RowAction) -> String {
        action.name.to_owned()
    }
}

/// Asks on the terminal. Backs every confirmed action unless `--yes` is set.
struct PromptConfirm;

impl Confirmer for PromptConfirm {
    async fn confirm(&mut self, prompt: &str) -> bool {
        Confirm::new(prompt)
            .with_default(false)
            .prompt()
            .unwrap_or(false)
    }
}

#[instrument(skip_all, fields(resource = R::NAME, filter = filter.as_deref().unwrap_or("")))]
pub async fn run_list<R: ConsoleResource>(
    ctx: &mut CliContext,
    filter: Option<String>,
    interactive: bool,
) -> Result<()> {
    ctx.ensure_authenticated();

    let mut table = ResourceTable::<R>::new();
    if let Err(e) = table.load(&ctx.config, &ctx.session).await {
        ctx.fail(R::LOAD_FAILURE, &e);
    }

    let query = filter.unwrap_or_default();
    let visible = table.visible(&query);
    if visible.is_empty() {
        ctx.out.dim(format!("No {} found.", R::NAME));
        return Ok(());
    }

    if interactive {
        let Some(id) = select_record(&visible)? else {
            return Ok(());
        };
        let Some(record) = visible.iter().find(|record| record.id() == id) else {
            return Ok(());
        };
        let Some(action) = select_action(*record)? else {
            return Ok(());
        };
        run_action::<R>(ctx, action.name, &id, false).await
    } else {
        render::<R>(&ctx.out, &visible);
        Ok(())
    }
}

#[instrument(skip_all, fields(resource = R::NAME, action = name, id))]
pub async fn run_action<R: ConsoleResource>(
    ctx: &mut CliContext,
    name: &str,
    id: &str,
    yes: bool,
) -> Result<()> {
    ctx.ensure_authenticated();

    let Some(action) = R::action(name) else {
        anyhow::bail!("{} has no action named {name}", R::SINGULAR);
    };

    let mut table = ResourceTable::<R>::new();
    let result = if yes {
        table
            .execute(&ctx.config, &ctx.session, &mut AlwaysConfirm, action, id)
            .await
    } else {
        table
            .execute(&ctx.config, &ctx.session, &mut PromptConfirm, action, id)
            .await
    };

    match result {
        Ok(ActionOutcome::Completed) => {
            ctx.out
                .success(format!("{} on {} {id} succeeded.", action.name, R::SINGULAR));
            // execute() already refetched the collection on success.
            let rows = table.visible("");
            if rows.is_empty() {
                ctx.out.dim(format!("No {} left.", R::NAME));
            } else {
                render::<R>(&ctx.out, &rows);
            }
            Ok(())
        }
        Ok(ActionOutcome::Cancelled) => {
            ctx.out.dim("Cancelled. Nothing was sent.");
            Ok(())
        }
        Err(e) => ctx.fail(action.failure, &e),
    }
}

fn render<R: ConsoleResource>(out: &Output, records: &[&R]) {
    let rows: Vec<R::Row> = records.iter().map(|record| record.row()).collect();
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    out.newline();
    out.print(table.to_string());
    out.count("Total", records.len());
}

fn select_record<R: ConsoleResource>(visible: &[&R]) -> Result<Option<String>> {
    let options: Vec<String> = visible
        .iter()
        .map(|record| format!("{} [{}]", record.summary(), record.id()))
        .collect();

    let selection = Select::new(&format!("Select a {}:", R::SINGULAR), options)
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt_skippable()
        .context("Failed to select record")?;

    // The row key sits in the trailing [brackets] of the selected line.
    Ok(selection.and_then(|selected| {
        selected
            .rfind('[')
            .map(|start| selected[start + 1..selected.len() - 1].to_owned())
    }))
}

fn select_action<R: ConsoleResource>(record: &R) -> Result<Option<&'static RowAction>> {
    let labels: Vec<String> = R::actions()
        .iter()
        .map(|action| record.action_label(action))
        .collect();

    let choice = Select::new("Action:", labels.clone())
        .prompt_skippable()
        .context("Failed to select action")?;

    Ok(choice
        .and_then(|chosen| labels.iter().position(|label| *label == chosen))
        .and_then(|index| R::actions().get(index)))
}

/// Shorten long free-text cells so tables stay readable.
pub(crate) fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    } else {
        s.to_owned()
    }
}

/// The date part of an ISO-8601 timestamp.
pub(crate) fn date_part(timestamp: &str) -> &str {
    timestamp
        .split_once('T')
        .map_or(timestamp, |(date, _)| date)
}

/// `-` for absent optional columns, matching how the console renders them.
pub(crate) fn dash(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_owned(),
        _ => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str_keeps_short_values() {
        assert_eq!(truncate_str("Bread Box", 24), "Bread Box");
    }

    #[test]
    fn test_truncate_str_shortens_long_values() {
        let long = "a".repeat(40);
        let shortened = truncate_str(&long, 24);
        assert_eq!(shortened.chars().count(), 24);
        assert!(shortened.ends_with("..."));
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-04-02T10:00:00Z"), "2025-04-02");
        assert_eq!(date_part("2025-04-02"), "2025-04-02");
    }

    #[test]
    fn test_dash_for_missing_values() {
        assert_eq!(dash(None), "-");
        assert_eq!(dash(Some("")), "-");
        assert_eq!(dash(Some("Beirut")), "Beirut");
    }
}
