//! Shared state every command runs against.

use anyhow::Result;
use sustaingo_business::{AdminConfig, ApiError, Session};
use tracing::{error, warn};

use crate::cli::Cli;
use crate::credentials::TokenFile;
use crate::output::Output;

/// Config, session, token store, and output, assembled once in `main`.
pub struct CliContext {
    pub config: AdminConfig,
    pub session: Session,
    pub tokens: TokenFile,
    pub out: Output,
}

impl CliContext {
    /// Build the context from parsed flags, restoring any stored session.
    pub fn initialize(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.api_url {
            Some(url) => AdminConfig::new(url.clone()),
            None => AdminConfig::default(),
        };
        config.analytics_auth = !cli.public_analytics;

        let tokens = TokenFile::open_default()?;
        let session = match tokens.load()? {
            Some(credential) => Session::with_credential(credential),
            None => Session::anonymous(),
        };

        Ok(Self {
            config,
            session,
            tokens,
            out: Output::new(),
        })
    }

    /// Bail out before any request when no credential is stored.
    pub fn ensure_authenticated(&self) {
        if !self.session.is_authenticated() {
            warn!("command requires a credential but none is stored");
            self.out.warning(ApiError::MissingCredential.to_string());
            self.out.dim("Run `sustaingo login` to authenticate.");
            std::process::exit(1);
        }
    }

    /// Report a failed API call and exit.
    ///
    /// Prints the fixed failure message with the underlying error dimmed
    /// beneath it. A 401 also destroys the stored credential, so the next
    /// invocation starts unauthenticated.
    pub fn fail(&mut self, message: &str, err: &ApiError) -> ! {
        error!("{message}: {err}");
        self.out.error(message);
        if message != err.to_string() {
            self.out.dim(err.to_string());
        }

        if self.session.discard_if_rejected(err) {
            drop(self.tokens.clear());
            self.out
                .warning("Stored session was rejected by the server. Please log in again.");
        }

        std::process::exit(1);
    }
}
