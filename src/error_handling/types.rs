//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure of a single fetch operation.
///
/// Non-success responses are not errors: they surface as an absent result.
/// This enum only covers conditions where no usable response was obtained,
/// so the caller (or the top-level entry point) can decide how hard to fail.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The lookup service could not be reached: the hostname did not resolve
    /// or the request timed out.
    #[error("connectivity failure: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// Any other transport-level I/O failure (reset connection, TLS failure,
    /// failed body read).
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered successfully but the body was not valid JSON.
    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// User-facing message for this failure.
    ///
    /// Connectivity problems get an actionable hint; everything else gets a
    /// generic message since there is nothing the user can do about it.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Connectivity(_) => {
                "Could not reach the lookup service. Please check your internet connection and try again"
            }
            FetchError::Transport(_) | FetchError::Parse(_) => {
                "An unknown error occurred. Please try again later"
            }
        }
    }

    /// True for failures that stem from the user's connection rather than
    /// from the service or the client itself.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::Connectivity(_))
    }
}
