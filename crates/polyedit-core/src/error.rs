//! Error handling for polyedit
//!
//! The editing core itself never fails: lookups return `Option` and stale
//! keys are silently skipped. Errors only arise at the edges:
//! - Coordinate construction from untrusted input
//! - Script and model (de)serialization
//! - File I/O performed by hosts and tools
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Coordinate validation error
///
/// Raised when a latitude/longitude pair cannot be represented as a
/// [`Coordinate`](crate::Coordinate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Latitude or longitude is NaN or infinite
    #[error("Non-finite coordinate ({latitude}, {longitude})")]
    NonFinite {
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
}

/// Main error type for polyedit
///
/// A unified error type for the fallible surfaces of the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate error
    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a coordinate error
    pub fn is_coordinate_error(&self) -> bool {
        matches!(self, Error::InvalidCoordinate(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
