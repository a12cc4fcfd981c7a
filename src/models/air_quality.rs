//! Air quality reading model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aqi::AqiCategory;
use crate::{Result, RuBreathingError};

/// Upper end of the conventional AQI scale
pub const DEFAULT_MAX_AQI: i32 = 500;

/// Snapshot of a pollution measurement
///
/// Fields are unconstrained: setters accept any value, and [`validate`](Self::validate)
/// is only run when a caller asks for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReading {
    /// Air Quality Index value
    aqi: i32,
    /// Pollutants driving this reading, e.g. "PM2.5" or "Ozone"
    primary_pollutants: Vec<String>,
    health_recommendations: String,
    /// When the measurement was taken
    timestamp: DateTime<Utc>,
    /// Weather at the time of data collection
    weather_conditions: String,
    /// Provider the reading came from
    data_source: String,
    /// Color scale label, e.g. "Green" or "Red"
    aqi_color: String,
}

impl AirQualityReading {
    /// Create a reading from all seven measured values
    #[must_use]
    pub fn new(
        aqi: i32,
        primary_pollutants: Vec<String>,
        health_recommendations: String,
        timestamp: DateTime<Utc>,
        weather_conditions: String,
        data_source: String,
        aqi_color: String,
    ) -> Self {
        Self {
            aqi,
            primary_pollutants,
            health_recommendations,
            timestamp,
            weather_conditions,
            data_source,
            aqi_color,
        }
    }

    #[must_use]
    pub fn aqi(&self) -> i32 {
        self.aqi
    }

    pub fn set_aqi(&mut self, aqi: i32) {
        let before = self.category();
        self.aqi = aqi;
        let after = self.category();
        if before != after {
            tracing::debug!(aqi, from = %before, to = %after, "AQI category changed");
        }
    }

    #[must_use]
    pub fn primary_pollutants(&self) -> &[String] {
        &self.primary_pollutants
    }

    pub fn set_primary_pollutants(&mut self, primary_pollutants: Vec<String>) {
        self.primary_pollutants = primary_pollutants;
    }

    /// Append one pollutant after the existing ones
    pub fn add_pollutant<S: Into<String>>(&mut self, pollutant: S) {
        self.primary_pollutants.push(pollutant.into());
    }

    #[must_use]
    pub fn health_recommendations(&self) -> &str {
        &self.health_recommendations
    }

    pub fn set_health_recommendations(&mut self, health_recommendations: String) {
        self.health_recommendations = health_recommendations;
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = timestamp;
    }

    #[must_use]
    pub fn weather_conditions(&self) -> &str {
        &self.weather_conditions
    }

    /// Replace the weather description. Leaves `aqi_color` untouched.
    pub fn set_weather_conditions(&mut self, weather_conditions: String) {
        self.weather_conditions = weather_conditions;
    }

    #[must_use]
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    pub fn set_data_source(&mut self, data_source: String) {
        self.data_source = data_source;
    }

    #[must_use]
    pub fn aqi_color(&self) -> &str {
        &self.aqi_color
    }

    pub fn set_aqi_color(&mut self, aqi_color: String) {
        self.aqi_color = aqi_color;
    }

    /// Band the current AQI value falls into. Independent of the stored color label.
    #[must_use]
    pub fn category(&self) -> AqiCategory {
        AqiCategory::from_aqi(self.aqi)
    }

    /// Check the AQI against the conventional 0..=500 scale
    pub fn validate(&self) -> Result<()> {
        self.validate_range(DEFAULT_MAX_AQI)
    }

    /// Check the AQI against `0..=max_aqi`
    pub fn validate_range(&self, max_aqi: i32) -> Result<()> {
        if (0..=max_aqi).contains(&self.aqi) {
            Ok(())
        } else {
            tracing::debug!(aqi = self.aqi, max_aqi, "AQI outside expected range");
            Err(RuBreathingError::validation(format!(
                "AQI {} is outside 0..={max_aqi}",
                self.aqi
            )))
        }
    }
}
