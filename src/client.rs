//! Process-wide shared client.

use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{ClientConfig, TimeoutUnit, Verbosity};
use crate::error_handling::FetchError;
use crate::fetch::fetch_identity;
use crate::models::IdentityRecord;

// The one process-wide instance; created on first access, never torn down.
static INSTANCE: LazyLock<NetworkClient> = LazyLock::new(|| NetworkClient {
    config: RwLock::new(ClientConfig::default()),
});

/// Shared entry point for identity lookups.
///
/// Owns the single [`ClientConfig`] read by every call made through it. The
/// lookup is an expensive network round trip, so configuration is
/// centralized behind one controlled entry point rather than scattered
/// across ad-hoc client instances. There is no public constructor: the only
/// way to obtain a `NetworkClient` is [`NetworkClient::instance`], which
/// makes a second instance unconstructible:
///
/// ```compile_fail
/// use net_identity::NetworkClient;
///
/// // The field is private; this does not compile.
/// let client = NetworkClient { config: todo!() };
/// ```
///
/// Code that wants its own configuration should call [`fetch_identity`]
/// with a caller-held [`ClientConfig`] instead.
pub struct NetworkClient {
    config: RwLock<ClientConfig>,
}

impl NetworkClient {
    /// Returns the process-wide instance, creating it on first call.
    ///
    /// First-time initialization is synchronized across threads and no
    /// caller can observe a partially-constructed instance; afterwards this
    /// is a plain static read with no locking.
    pub fn instance() -> &'static NetworkClient {
        &INSTANCE
    }

    fn read(&self) -> RwLockReadGuard<'_, ClientConfig> {
        // A poisoned lock only means a writer panicked mid-assignment of
        // plain data; the configuration is still usable.
        self.config.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ClientConfig> {
        self.config.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> ClientConfig {
        self.read().clone()
    }

    /// Current connect timeout value, measured in [`Self::timeout_unit`].
    pub fn timeout_value(&self) -> u64 {
        self.read().timeout_value
    }

    /// Sets the connect timeout value. No validation; takes effect on the
    /// next call.
    pub fn set_timeout_value(&self, value: u64) {
        self.write().timeout_value = value;
    }

    /// Current connect timeout unit.
    pub fn timeout_unit(&self) -> TimeoutUnit {
        self.read().timeout_unit
    }

    /// Sets the connect timeout unit.
    pub fn set_timeout_unit(&self, unit: TimeoutUnit) {
        self.write().timeout_unit = unit;
    }

    /// Current transport trace verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.read().verbosity
    }

    /// Sets the transport trace verbosity.
    pub fn set_verbosity(&self, verbosity: Verbosity) {
        self.write().verbosity = verbosity;
    }

    /// Whether the transport re-sends once after a connect failure.
    pub fn retry_on_connect_failure(&self) -> bool {
        self.read().retry_on_connect_failure
    }

    /// Enables or disables the transport's single reconnect.
    pub fn set_retry_on_connect_failure(&self, retry: bool) {
        self.write().retry_on_connect_failure = retry;
    }

    /// Fetches the caller's network identity with the current configuration.
    ///
    /// The configuration is snapshotted when the transport client is built,
    /// so changes made while this call is in flight apply to the next call,
    /// not this one.
    ///
    /// # Errors
    ///
    /// See [`fetch_identity`].
    pub async fn fetch(&self) -> Result<Option<IdentityRecord>, FetchError> {
        let config = self.config();
        fetch_identity(&config).await
    }
}
