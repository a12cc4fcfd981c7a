//! `RUBreathing` - air quality data model
//!
//! This library provides the records an air quality tracking application
//! passes around: pollution readings, the locations they were taken at,
//! and the AQI color scale.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;

// Re-export core types for public API
pub use config::RuBreathingConfig;
pub use error::RuBreathingError;
pub use logging::init_tracing;
pub use models::{AirQualityReading, AirQualityReport, AqiCategory, Location};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RuBreathingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
