// NOTE: tourdesk architecture rationale
//
// Why typed records (not rendered text) as the interaction source?
// - Filtering and sorting over formatted strings breaks the moment a
//   format changes
// - Every surface projects from the same Vec<TourRecord>; formatting
//   happens once, on the way out
//
// Why handler/presenter/renderer for the TUI?
// - The handler thread owns the backend and its simulated latency
// - Presenters are pure functions from domain state to view models
// - The renderer owns the terminal and never touches domain logic
// - Trade-off: a channel hop per update, but the UI thread can never block
//   on a "network" call
//
// Why an in-memory mock backend?
// - The real booking system is out of scope; the store keeps mutations
//   coherent for the life of the process and nothing else

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, TourCommand};
pub use commands::run;
