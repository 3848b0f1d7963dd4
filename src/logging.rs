// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: unreadable preferences, missing translations
//! - `info`: session milestones (login, logout, publish)
//! - `debug`: tab and overlay transitions
//!
//! `RUST_LOG` overrides the default filter.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to this crate when `RUST_LOG` is unset.
    pub level: Level,
    /// Whether to include the module path in log output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// - 0: info
    /// - 1: debug
    /// - 2+: trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    fn default_directive(&self) -> String {
        format!("{}={}", env!("CARGO_PKG_NAME"), self.level)
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init(config: &LogConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.with_target)
        .try_init();

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5).level, Level::TRACE);
    }

    #[test]
    fn default_directive_targets_this_crate() {
        let config = LogConfig::default();
        assert_eq!(config.default_directive(), "learnreel=INFO");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(&LogConfig::default());
        init(&LogConfig::default());
    }
}
