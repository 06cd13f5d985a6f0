//! Error types and transport error classification.

mod categorization;
mod types;

pub(crate) use categorization::classify_transport_error;
pub use types::{FetchError, InitializationError};
