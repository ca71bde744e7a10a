//! Core domain types shared by every tourdesk crate.
//!
//! This crate holds schemas only: tour records, the aggregate stats
//! snapshot, and the static destination catalog. Logic that operates on
//! these types lives in `tourdesk-engine`.

mod catalog;
mod error;
mod tour;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use tour::{NewTour, StatsSnapshot, TourDraft, TourId, TourRecord, TourType};
