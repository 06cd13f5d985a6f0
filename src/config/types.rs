//! Configuration types.
//!
//! This module defines the enums and structs used for client configuration
//! and command-line argument parsing.

use std::time::Duration;

use clap::ValueEnum;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::constants::DEFAULT_TIMEOUT_VALUE;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTTP transport trace verbosity.
///
/// Distinct from [`LogLevel`]: the log level filters which log lines are
/// shown at all, while the verbosity decides how much of each HTTP exchange
/// is traced in the first place. The enum is translated at the transport
/// boundary, so nothing outside the fetch path depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, EnumIterMacro)]
pub enum Verbosity {
    /// No transport tracing
    None,
    /// Request line and response status line
    #[default]
    Basic,
    /// `Basic` plus request and response header dumps
    Headers,
    /// `Headers` plus the full response body
    Body,
}

impl Verbosity {
    /// True when this verbosity traces at least as much as `other`.
    pub(crate) fn at_least(self, other: Verbosity) -> bool {
        self as u8 >= other as u8
    }
}

/// Unit in which the configured connect timeout value is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, EnumIterMacro)]
pub enum TimeoutUnit {
    /// Milliseconds
    Milliseconds,
    /// Seconds
    #[default]
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
}

impl TimeoutUnit {
    /// Converts a raw timeout value in this unit into a [`Duration`].
    pub fn to_duration(self, value: u64) -> Duration {
        match self {
            TimeoutUnit::Milliseconds => Duration::from_millis(value),
            TimeoutUnit::Seconds => Duration::from_secs(value),
            TimeoutUnit::Minutes => Duration::from_secs(value.saturating_mul(60)),
            TimeoutUnit::Hours => Duration::from_secs(value.saturating_mul(3600)),
        }
    }
}

/// Client configuration read at the moment a transport client is built.
///
/// Plain data, no validation on set: a zero timeout is passed through to the
/// transport layer, which surfaces its own error at call time. Changes made
/// while a request is in flight apply to the next call, never the current one.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Connect timeout value, measured in `timeout_unit`
    pub timeout_value: u64,

    /// Unit for `timeout_value`
    pub timeout_unit: TimeoutUnit,

    /// HTTP transport trace verbosity
    pub verbosity: Verbosity,

    /// Silently re-send once after a connect-phase failure
    pub retry_on_connect_failure: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_value: DEFAULT_TIMEOUT_VALUE,
            timeout_unit: TimeoutUnit::Seconds,
            verbosity: Verbosity::Basic,
            retry_on_connect_failure: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout_value, 60);
        assert_eq!(config.timeout_unit, TimeoutUnit::Seconds);
        assert_eq!(config.verbosity, Verbosity::Basic);
        assert!(config.retry_on_connect_failure);
    }

    #[test]
    fn test_timeout_unit_to_duration() {
        assert_eq!(
            TimeoutUnit::Milliseconds.to_duration(1500),
            Duration::from_millis(1500)
        );
        assert_eq!(TimeoutUnit::Seconds.to_duration(60), Duration::from_secs(60));
        assert_eq!(
            TimeoutUnit::Minutes.to_duration(2),
            Duration::from_secs(120)
        );
        assert_eq!(
            TimeoutUnit::Hours.to_duration(1),
            Duration::from_secs(3600)
        );
    }

    #[test]
    fn test_timeout_unit_zero_passes_through() {
        // No validation on set: zero is converted as-is and left for the
        // transport layer to reject.
        for unit in TimeoutUnit::iter() {
            assert_eq!(unit.to_duration(0), Duration::ZERO);
        }
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(Verbosity::Body.at_least(Verbosity::Headers));
        assert!(Verbosity::Headers.at_least(Verbosity::Basic));
        assert!(Verbosity::Basic.at_least(Verbosity::None));
        assert!(!Verbosity::None.at_least(Verbosity::Basic));
        assert!(!Verbosity::Basic.at_least(Verbosity::Headers));
    }

    #[test]
    fn test_verbosity_at_least_is_reflexive() {
        for verbosity in Verbosity::iter() {
            assert!(
                verbosity.at_least(verbosity),
                "{:?} should trace at least as much as itself",
                verbosity
            );
        }
    }

    #[test]
    fn test_verbosity_default_is_basic() {
        assert_eq!(Verbosity::default(), Verbosity::Basic);
    }
}
