//! Logging setup for the demo binary.
//!
//! Logs go to stderr so stdout carries only the walkthrough.

use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "warn", "closures=debug").
    pub level: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.level))
    }
}

pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter()?)
        .with_writer(io::stderr)
        .with_ansi(config.ansi)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = LoggingConfig::default().with_level("debug").with_ansi(false);
        assert_eq!(config.level, "debug");
        assert!(!config.ansi);
    }

    #[test]
    fn test_bad_level_rejected() {
        std::env::remove_var("RUST_LOG");
        let config = LoggingConfig::default().with_level("closures=notalevel");
        assert!(config.filter().is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig::default().with_level("error");
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
