//! Transport client initialization.

use reqwest::ClientBuilder;

use crate::config::{ClientConfig, FIXED_READ_TIMEOUT};

/// Builds the transport client for a single fetch.
///
/// A fresh client is constructed per call so that configuration changes made
/// between calls always take effect and concurrent invocations never share
/// connections or response bodies. Configured with:
/// - Connect timeout from the current configuration
/// - The fixed read timeout (see [`FIXED_READ_TIMEOUT`])
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub(crate) fn init_transport_client(
    config: &ClientConfig,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .connect_timeout(config.timeout_unit.to_duration(config.timeout_value))
        .read_timeout(FIXED_READ_TIMEOUT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeoutUnit;

    #[test]
    fn test_init_transport_client_with_defaults() {
        let client = init_transport_client(&ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_transport_client_accepts_unvalidated_timeout() {
        // Zero is passed through on purpose; the transport layer owns the
        // complaint, not the configuration surface.
        let config = ClientConfig {
            timeout_value: 0,
            timeout_unit: TimeoutUnit::Milliseconds,
            ..ClientConfig::default()
        };
        assert!(init_transport_client(&config).is_ok());
    }
}
