//! Environment-based configuration.
//!
//! Every setting has a default; `TAILOR_DESK_*` environment variables
//! override them. `RUST_LOG`, when set, still takes precedence over the
//! configured log filter (see [`super::setup_tracing`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_PREFIX: &str = "TAILOR_DESK_";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue { key: String, value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `tailor_desk::clients=debug`.
    pub filter: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub logging: LoggingConfig,
    /// Capacity of each actor's request channel.
    pub channel_buffer: usize,
    /// Invoice ids are `<prefix>-<5 digit counter>`.
    pub invoice_prefix: String,
    /// ISO 4217 code shown next to amounts.
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            logging: LoggingConfig {
                filter: "info".to_string(),
                format: LogFormat::Compact,
            },
            channel_buffer: 32,
            invoice_prefix: "INV".to_string(),
            currency: "USD".to_string(),
        }
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: format!("{ENV_PREFIX}{key}"),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl AppConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(format!("{ENV_PREFIX}{key}")).ok())
    }

    /// Builds configuration from a key lookup (keys without the prefix).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("ENV") {
            config.environment = match value.trim().to_lowercase().as_str() {
                "development" | "dev" => Environment::Development,
                "production" | "prod" => Environment::Production,
                _ => return Err(invalid("ENV", &value, "expected development or production")),
            };
            // Production defaults to quieter logs unless a filter is given.
            if config.environment.is_production() {
                config.logging.filter = "warn".to_string();
                config.logging.format = LogFormat::Json;
            }
        }

        if let Some(value) = lookup("LOG") {
            if value.trim().is_empty() {
                return Err(invalid("LOG", &value, "filter must not be empty"));
            }
            config.logging.filter = value.trim().to_string();
        }

        if let Some(value) = lookup("LOG_FORMAT") {
            config.logging.format = match value.trim().to_lowercase().as_str() {
                "compact" => LogFormat::Compact,
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => return Err(invalid("LOG_FORMAT", &value, "expected compact, pretty or json")),
            };
        }

        if let Some(value) = lookup("CHANNEL_BUFFER") {
            config.channel_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(invalid("CHANNEL_BUFFER", &value, "expected a positive integer")),
            };
        }

        if let Some(value) = lookup("INVOICE_PREFIX") {
            let prefix = value.trim();
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(invalid("INVOICE_PREFIX", &value, "expected ASCII letters or digits"));
            }
            config.invoice_prefix = prefix.to_uppercase();
        }

        if let Some(value) = lookup("CURRENCY") {
            let code = value.trim();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid("CURRENCY", &value, "expected a 3-letter currency code"));
            }
            config.currency = code.to_uppercase();
        }

        Ok(config)
    }
}
