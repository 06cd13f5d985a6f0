//! Configuration constants.

use std::time::Duration;

/// Fixed lookup endpoint queried for the caller's network identity.
pub const LOOKUP_ENDPOINT: &str = "https://ipinfo.io";

/// Default connect timeout value, interpreted in the default unit (seconds).
pub const DEFAULT_TIMEOUT_VALUE: u64 = 60;

/// Read timeout applied to every transport client.
///
/// Deliberately independent of the configurable connect timeout: changing
/// the connect timeout must not change how long an established connection
/// may stay silent.
pub const FIXED_READ_TIMEOUT: Duration = Duration::from_secs(60);
