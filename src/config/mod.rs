//! Client configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts)
//! - Configuration and CLI option types

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{ClientConfig, LogFormat, LogLevel, TimeoutUnit, Verbosity};
