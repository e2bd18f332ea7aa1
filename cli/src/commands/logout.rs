//! Logout command implementation.

use anyhow::Result;
use tracing::{info, instrument};

use crate::context::CliContext;

/// Destroy the stored credential. Total over storage state: logging out
/// while logged out is not an error.
#[instrument(skip_all, name = "logout")]
pub fn run_logout(ctx: &mut CliContext) -> Result<()> {
    ctx.session.clear();

    if ctx.tokens.clear()? {
        info!("stored tokens removed");
        ctx.out.success("Logged out.");
    } else {
        ctx.out.dim("No stored session.");
    }

    Ok(())
}
