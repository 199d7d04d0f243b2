//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; a missing file section takes its defaults.
//!
//! # Example
//!
//! ```no_run
//! use surebet::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use super::scan::{HistoryConfig, WatchConfig};
use crate::application::scanner::ScanConfig;
use crate::error::{ConfigError, Result};

/// Largest accepted `total_stake`. Keeps every stake split well inside
/// `Decimal` range for realistic odds.
pub const MAX_TOTAL_STAKE: Decimal = dec!(1000000000000);

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Pipeline thresholds, stake and market allow-list.
    #[serde(default)]
    pub scan: ScanConfig,

    /// Opportunity history kept between `watch` cycles.
    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Restrict scanning to `sports`. An empty slice keeps the configured list.
    #[must_use]
    pub fn with_sports(mut self, sports: &[String]) -> Self {
        if !sports.is_empty() {
            self.scan.sports = sports.to_vec();
        }
        self
    }

    /// Apply per-invocation overrides and re-validate.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is out of range.
    #[allow(clippy::result_large_err)]
    pub fn with_overrides(
        mut self,
        total_stake: Option<Decimal>,
        min_margin_percent: Option<Decimal>,
        interval_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(stake) = total_stake {
            self.scan.total_stake = stake;
        }
        if let Some(margin) = min_margin_percent {
            self.scan.min_margin_percent = margin;
        }
        if let Some(interval) = interval_secs {
            self.watch.interval_secs = interval;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.scan.total_stake <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "total_stake",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.scan.total_stake > MAX_TOTAL_STAKE {
            return Err(ConfigError::InvalidValue {
                field: "total_stake",
                reason: format!("must be at most {MAX_TOTAL_STAKE}"),
            }
            .into());
        }
        if self.scan.min_margin_percent < Decimal::ZERO
            || self.scan.min_margin_percent >= Decimal::ONE_HUNDRED
        {
            return Err(ConfigError::InvalidValue {
                field: "min_margin_percent",
                reason: "must be at least 0 and below 100".to_string(),
            }
            .into());
        }
        if self.scan.markets.iter().any(|key| key.as_str().trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "markets",
                reason: "market keys must not be empty".to_string(),
            }
            .into());
        }
        if self.scan.sports.iter().any(|sport| sport.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "sports",
                reason: "sport names must not be empty".to_string(),
            }
            .into());
        }
        if self.history.capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "capacity",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.watch.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize tracing from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
