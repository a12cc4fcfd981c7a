//! Error types and handling for the `RUBreathing` data model

use thiserror::Error;

/// Main error type for the `RUBreathing` crate
#[derive(Error, Debug)]
pub enum RuBreathingError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Opt-in validation errors on readings and locations
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// JSON encoding or decoding errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RuBreathingError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RuBreathingError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            RuBreathingError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            RuBreathingError::Serialization { .. } => {
                "Could not read or write air quality data. The record may be malformed."
                    .to_string()
            }
            RuBreathingError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
