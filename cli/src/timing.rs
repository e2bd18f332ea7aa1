//! Tracing setup with optional latency reporting.
//!
//! Commands annotated with `#[instrument]` get their execution time logged
//! when `--timing` is passed, via `FmtSpan::CLOSE` span events. Everything
//! goes to stderr so tables and prompts on stdout stay clean.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

/// Initialize the tracing subscriber.
///
/// `verbose` raises the default filter to DEBUG; `timing` keeps INFO so span
/// close events (logged at INFO) come through. `RUST_LOG` still overrides
/// either default.
pub fn init_tracing(verbose: bool, timing: bool) {
    let default = if verbose {
        LevelFilter::DEBUG
    } else if timing {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    let span_events = if timing { FmtSpan::CLOSE } else { FmtSpan::NONE };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(verbose)
                .with_level(true)
                .with_span_events(span_events)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
