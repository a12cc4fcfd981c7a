//! Configuration management for `RUBreathing`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RuBreathingError;
use crate::models::DEFAULT_MAX_AQI;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `RUBreathing`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuBreathingConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Bounds used by opt-in validation
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Bounds applied when a caller asks a reading to validate itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Highest AQI accepted by validation
    #[serde(default = "default_max_aqi")]
    pub max_aqi: i32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_max_aqi() -> i32 {
    DEFAULT_MAX_AQI
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_aqi: default_max_aqi(),
        }
    }
}

impl RuBreathingConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            tracing::debug!(path = %config_file.display(), "Loading config file");
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        } else {
            tracing::debug!(
                path = %config_file.display(),
                "Config file not found, using defaults and environment"
            );
        }

        // RUBREATHING_LOGGING__LEVEL=debug etc.
        builder = builder.add_source(
            Environment::with_prefix("RUBREATHING")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: RuBreathingConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rubreathing").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RuBreathingError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(RuBreathingError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.validation.max_aqi <= 0 {
            return Err(RuBreathingError::config("Maximum AQI must be positive").into());
        }

        Ok(())
    }

    /// Create configuration directory if it doesn't exist
    pub fn ensure_config_dir() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RuBreathingError::config("Unable to determine config directory"))?
            .join("rubreathing");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}
