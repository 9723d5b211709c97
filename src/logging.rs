//! `tracing` subscriber setup shared by both binaries.
//!
//! User-facing messages do not go through here (see `color`); this only
//! carries developer diagnostics, silent unless `RUST_LOG` asks for them.

use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr fmt subscriber filtered by `RUST_LOG` (default `warn`).
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    if INIT.get().is_some() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        // Another subscriber is already global (e.g. a test harness); keep it.
        return;
    }

    let _ = INIT.set(());
    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        target = env!("MCP_CLI_BUILD_TARGET"),
        profile = env!("MCP_CLI_BUILD_PROFILE"),
        "logging initialized"
    );
}
