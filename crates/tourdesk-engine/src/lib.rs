//! Pure view-state logic for the tourdesk UI surfaces.
//!
//! Everything in this crate is deterministic and I/O-free: the list
//! controller (search/filter/sort over typed records), the eased counter
//! animation used by the dashboard stat tiles, and the tour form state
//! machine with its country→city→hotel cascade. The CLI and the TUI both
//! drive the same engine, so the two surfaces cannot drift apart.

pub mod animate;
pub mod form;
pub mod list;
pub mod summary;

pub use animate::{COUNTER_WINDOW, CounterTween, ease_out_quart};
pub use form::{Field, FieldError, FormMode, FormPhase, TourForm, validate_draft};
pub use list::{ListController, ListEntry, SortKey, TypeFilter};
pub use summary::recent_tours;
