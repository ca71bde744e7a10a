//! Tracing setup for the CLI binary.
//!
//! Quiet by default; `TOURDESK_LOG` takes the usual env-filter directives
//! (`tourdesk_runtime=debug`, `info`, ...). Output goes to stderr so it
//! never mixes with command output, and callers skip init entirely while
//! the TUI owns the terminal.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TOURDESK_LOG";

/// Install the global subscriber. Safe to call once per process; a second
/// call is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
