//! Generic resource table controller.
//!
//! Every admin view is the same machine over a different record type: fetch a
//! collection with the stored credential, show it, filter it locally, run row
//! actions, refetch after a successful mutation. [`ResourceTable`] implements
//! that machine once; the per-resource differences live entirely in
//! [`AdminResource`] and its [`RowAction`] tables.
//!
//! ## States
//!
//! `Unauthenticated -> Loading -> {Loaded, LoadFailed}`, with
//! `Loaded -> Mutating -> Loading` for row actions. Filtering is a view over
//! loaded rows, never a state of its own.
//!
//! ## Overlapping loads
//!
//! Each load takes a monotonically increasing [`LoadTicket`]. Only the most
//! recently issued ticket may apply its response; anything older is discarded,
//! so a slow early response can never overwrite a newer one.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::config::AdminConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{Client, Method};
use crate::resources::{AdminResource, RowAction};
use crate::session::Session;

/// Where a table is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    /// No load attempted, or refused for lack of a credential.
    Unauthenticated,
    /// A load is in flight.
    Loading,
    /// The collection reflects the most recent successful fetch.
    Loaded,
    /// The most recent load failed; previously loaded rows are kept.
    LoadFailed(String),
    /// A row action is in flight.
    Mutating,
}

/// Proof that a load was begun. Completing consumes the ticket.
#[derive(Debug)]
pub struct LoadTicket(u64);

/// Outcome of [`ResourceTable::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran and the table was refetched.
    Completed,
    /// The confirmation prompt was declined, nothing was sent.
    Cancelled,
}

/// Asks the operator to confirm a destructive action.
///
/// The CLI backs this with an interactive prompt; tests script the answers.
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// Always answers yes. Backs the `--yes` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirmer for AlwaysConfirm {
    async fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// GET the full collection for `R` with the session's credential.
pub async fn fetch_all<R: AdminResource>(
    config: &AdminConfig,
    session: &Session,
) -> ApiResult<Vec<R>> {
    let credential = session.require()?;
    let url = format!("{}{}", config.api_url(), R::LIST_PATH);

    let response = Client::get(&url)
        .bearer(Some(credential.access.as_str()))
        .send()
        .await?;

    if !response.is_success() {
        return Err(ApiError::Status(response.status));
    }

    response
        .json()
        .map_err(|e| ApiError::decode(format!("Failed to parse {} list: {e}", R::NAME)))
}

/// The controller: a collection of `R` plus its lifecycle state.
#[derive(Debug)]
pub struct ResourceTable<R: AdminResource> {
    rows: Vec<R>,
    status: TableStatus,
    next_ticket: u64,
    current_ticket: Option<u64>,
    last_loaded: Option<DateTime<Utc>>,
}

impl<R: AdminResource> Default for ResourceTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AdminResource> ResourceTable<R> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            status: TableStatus::Unauthenticated,
            next_ticket: 0,
            current_ticket: None,
            last_loaded: None,
        }
    }

    pub fn status(&self) -> &TableStatus {
        &self.status
    }

    /// All loaded rows in fetch order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// When the collection was last replaced.
    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        self.last_loaded
    }

    /// Start a load: check the credential, then claim the next ticket.
    ///
    /// Without a credential no request may be made; the table drops back to
    /// `Unauthenticated` and the caller gets [`ApiError::MissingCredential`].
    pub fn begin_load(&mut self, session: &Session) -> ApiResult<LoadTicket> {
        if let Err(e) = session.require() {
            self.status = TableStatus::Unauthenticated;
            return Err(e);
        }

        self.next_ticket += 1;
        self.current_ticket = Some(self.next_ticket);
        self.status = TableStatus::Loading;
        log::debug!("loading {} (ticket {})", R::NAME, self.next_ticket);
        Ok(LoadTicket(self.next_ticket))
    }

    /// Apply a load result. Returns false when the ticket is stale and the
    /// result was discarded.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: ApiResult<Vec<R>>) -> bool {
        if self.current_ticket != Some(ticket.0) {
            log::debug!("discarding stale {} load (ticket {})", R::NAME, ticket.0);
            return false;
        }
        self.current_ticket = None;

        match result {
            Ok(rows) => {
                log::info!("loaded {} {}", rows.len(), R::NAME);
                self.rows = rows;
                self.status = TableStatus::Loaded;
                self.last_loaded = Some(Utc::now());
            }
            Err(e) => {
                log::warn!("loading {} failed: {e}", R::NAME);
                self.status = TableStatus::LoadFailed(e.to_string());
            }
        }
        true
    }

    /// Fetch the collection and apply it: [`Self::begin_load`], the list
    /// request, [`Self::complete_load`].
    pub async fn load(&mut self, config: &AdminConfig, session: &Session) -> ApiResult<()> {
        let ticket = self.begin_load(session)?;
        let result = fetch_all::<R>(config, session).await;
        let outcome = result.as_ref().map(|_| ()).map_err(ApiError::clone);
        self.complete_load(ticket, result);
        outcome
    }

    /// Rows matching `query`, without touching the stored collection.
    ///
    /// The query is trimmed and matched case-insensitively against each
    /// row's filter key. An empty query returns everything in fetch order;
    /// rows without a key never match a non-empty query.
    pub fn visible(&self, query: &str) -> Vec<&R> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.rows.iter().collect();
        }

        self.rows
            .iter()
            .filter(|row| {
                row.filter_key()
                    .is_some_and(|key| key.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Run a row action against `id`.
    ///
    /// Confirmed actions ask first and return [`ActionOutcome::Cancelled`]
    /// without sending anything when declined. A successful request refetches
    /// the collection exactly once; a failed one leaves rows and state as
    /// they were.
    pub async fn execute<C: Confirmer>(
        &mut self,
        config: &AdminConfig,
        session: &Session,
        confirmer: &mut C,
        action: &RowAction,
        id: &str,
    ) -> ApiResult<ActionOutcome> {
        let credential = session.require()?;

        if let Some(prompt) = action.confirm {
            if !confirmer.confirm(&prompt(id)).await {
                log::debug!("{} {} on {id} cancelled", R::NAME, action.name);
                return Ok(ActionOutcome::Cancelled);
            }
        }

        let previous = self.status.clone();
        self.status = TableStatus::Mutating;

        let url = format!("{}{}", config.api_url(), (action.path)(id));
        let request = match action.method {
            // Toggle-style PATCH endpoints take an empty JSON object.
            Method::Patch => Client::patch(&url)
                .json(&serde_json::json!({}))
                .map_err(|e| ApiError::decode(format!("Failed to serialize request: {e}")))?,
            _ => Client::request(action.method, &url),
        };

        let sent = request
            .bearer(Some(credential.access.as_str()))
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                self.status = previous;
                return Err(e.into());
            }
        };

        if !response.is_success() {
            log::warn!(
                "{} {} on {id} returned {}",
                R::NAME,
                action.name,
                response.status
            );
            self.status = previous;
            return Err(ApiError::Status(response.status));
        }

        log::info!("{} {} on {id} succeeded", R::NAME, action.name);
        self.load(config, session).await?;
        Ok(ActionOutcome::Completed)
    }
}
