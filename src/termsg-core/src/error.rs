//! Error types for termsg operations.

use thiserror::Error;

/// Error type for formatter operations.
///
/// Validation failures are reported before anything is written or mutated.
/// Sink failures are surfaced unchanged.
#[derive(Error, Debug)]
pub enum Error {
    /// A setter, style key or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing to a sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns true for [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Result type alias using the termsg Error type.
pub type Result<T> = std::result::Result<T, Error>;
