use std::fmt;

use crate::TourId;

/// Result type for tourdesk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// No tour exists with the given id
    TourNotFound(TourId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TourNotFound(id) => write!(f, "tour not found: {}", id),
        }
    }
}

impl std::error::Error for Error {}
