//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - The logger (level, format)
//! - The per-call HTTP transport client

mod client;
mod logger;

pub(crate) use client::init_transport_client;
pub use logger::init_logger_with;
