//! net_identity library: public network identity lookup
//!
//! This library fetches the caller's public network identity (IP address,
//! hostname, geolocation fields) from ipinfo.io and returns it as a
//! structured record.
//!
//! # Example
//!
//! ```no_run
//! use net_identity::{NetworkClient, Verbosity};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = NetworkClient::instance();
//! client.set_verbosity(Verbosity::Body);
//!
//! if let Some(identity) = client.fetch().await? {
//!     println!("{identity}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Callers that prefer explicit state over the shared instance can hold a
//! [`ClientConfig`] themselves and use the stateless [`fetch_identity`]:
//!
//! ```no_run
//! use net_identity::{fetch_identity, ClientConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let identity = fetch_identity(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod client;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;

// Re-export public API
pub use client::NetworkClient;
pub use config::{ClientConfig, LogFormat, LogLevel, TimeoutUnit, Verbosity};
pub use error_handling::{FetchError, InitializationError};
pub use fetch::{fetch_identity, fetch_identity_from};
pub use models::IdentityRecord;
