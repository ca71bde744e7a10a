//! Runtime services: the mock agency backend, configuration, logging setup,
//! and refresh pacing for the live dashboard.
//!
//! There is no real network here. The booking backend is simulated by an
//! in-memory store behind a client that sleeps a configured latency on
//! mutations, which keeps the UI layers honest about asynchrony without
//! inventing a wire protocol.

mod backend;
mod config;
mod error;
pub mod logging;
mod refresh;
pub mod samples;

pub use backend::AgencyBackend;
pub use config::{Config, resolve_config_path};
pub use error::{Error, Result};
pub use refresh::RefreshTimer;
