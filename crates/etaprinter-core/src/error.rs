// Rust guideline compliant 2026-02-06

//! Error types for the ETA printer core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for ETA printer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// A construction or update argument was rejected.
    InvalidArgument,
    /// The tracker already reached its terminal state.
    ClosedTracker,
    /// Writing to or closing the output sink failed.
    SinkWrite,
    /// Configuration could not be loaded or validated.
    ConfigError,
}

/// Error types for ETA printer operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `update` or `finish` was called after the terminal transition.
    #[error("Tracker is closed: the batch was already completed")]
    ClosedTracker,

    /// The output sink rejected a write, flush or close.
    #[error("Sink write error: {0}")]
    SinkWrite(#[from] std::io::Error),

    /// Configuration file or environment value was invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Error::ClosedTracker => ErrorCode::ClosedTracker,
            Error::SinkWrite(_) => ErrorCode::SinkWrite,
            Error::Config(_) => ErrorCode::ConfigError,
        }
    }
}
