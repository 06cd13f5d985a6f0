//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `net_identity` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//! - The fatal exit path for transport failures
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process;

use net_identity::initialization::init_logger_with;
use net_identity::{LogFormat, LogLevel, NetworkClient, TimeoutUnit, Verbosity};

/// Fetch your public network identity from ipinfo.io.
#[derive(Debug, Parser)]
#[command(name = "net_identity", version, about)]
struct Opt {
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,

    /// HTTP transport trace verbosity
    #[arg(long, value_enum, default_value = "basic")]
    trace: Verbosity,

    /// Connect timeout value, measured in --timeout-unit
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Unit for --timeout
    #[arg(long, value_enum, default_value = "seconds")]
    timeout_unit: TimeoutUnit,

    /// Disable the transport's single reconnect after a connect failure
    #[arg(long)]
    no_reconnect: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let client = NetworkClient::instance();
    client.set_timeout_value(opt.timeout);
    client.set_timeout_unit(opt.timeout_unit);
    client.set_verbosity(opt.trace);
    client.set_retry_on_connect_failure(!opt.no_reconnect);

    match client.fetch().await {
        Ok(Some(identity)) => {
            println!("{identity}");
            Ok(())
        }
        Ok(None) => {
            println!("The lookup service returned no identity.");
            Ok(())
        }
        Err(e) => {
            error!("{}", e.user_message());
            process::exit(1);
        }
    }
}
