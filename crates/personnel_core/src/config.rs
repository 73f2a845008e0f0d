//! Core runtime configuration.
//!
//! # Responsibility
//! - Hold tunables shared by the service layer and the process composer.
//! - Load them from JSON text, falling back to defaults per missing field.
//!
//! # Invariants
//! - `default_minimum_salary` is strictly positive after `validate()`.
//! - `log_level` is one of trace|debug|info|warn|error after `validate()`.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reference minimum salary used when a ratio request omits one (1320.00).
pub const DEFAULT_MINIMUM_SALARY: Decimal = Decimal::from_parts(132000, 0, 0, false, 2);

/// Configuration load/validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
    NonPositiveMinimumSalary(Decimal),
    LogLevel(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::NonPositiveMinimumSalary(value) => {
                write!(f, "default_minimum_salary must be positive, got {value}")
            }
            Self::LogLevel(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::LogLevel(err) => Some(err),
            Self::NonPositiveMinimumSalary(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Tunables for the personnel core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub default_minimum_salary: Decimal,
    pub log_level: String,
    /// Whether the composer loads the demo records at startup.
    pub seed_demo_data: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            default_minimum_salary: DEFAULT_MINIMUM_SALARY,
            log_level: default_log_level().to_string(),
            seed_demo_data: true,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_minimum_salary <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveMinimumSalary(
                self.default_minimum_salary,
            ));
        }
        normalize_level(&self.log_level).map_err(ConfigError::LogLevel)?;
        Ok(())
    }
}
