//! Transport error classification.

use crate::error_handling::FetchError;

/// Classifies a transport-level `reqwest::Error` into a [`FetchError`].
///
/// Timeouts and unresolved-hostname conditions both point at the user's
/// connection and map to [`FetchError::Connectivity`]; every other I/O
/// failure (refused connection, reset, TLS) maps to
/// [`FetchError::Transport`].
pub(crate) fn classify_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() || is_host_resolution_failure(&error) {
        FetchError::Connectivity(error)
    } else {
        FetchError::Transport(error)
    }
}

/// Detects DNS resolution failures by walking the error source chain.
///
/// reqwest surfaces unresolved hostnames as connect errors without a
/// dedicated predicate, so the chain is inspected for the resolver's
/// message markers instead of relying on the top-level display string.
fn is_host_resolution_failure(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let msg = cause.to_string().to_lowercase();
        if msg.contains("dns") || msg.contains("resolve") || msg.contains("lookup") {
            return true;
        }
        source = cause.source();
    }
    false
}
