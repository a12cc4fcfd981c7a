//! Reading paired with the location it was taken at

use serde::{Deserialize, Serialize};

use super::{AirQualityReading, Location};
use crate::{Result, RuBreathingError};

/// An air quality reading together with where it was measured
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AirQualityReport {
    location: Location,
    reading: AirQualityReading,
}

impl AirQualityReport {
    #[must_use]
    pub fn new(location: Location, reading: AirQualityReading) -> Self {
        Self { location, reading }
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut Location {
        &mut self.location
    }

    #[must_use]
    pub fn reading(&self) -> &AirQualityReading {
        &self.reading
    }

    pub fn reading_mut(&mut self) -> &mut AirQualityReading {
        &mut self.reading
    }

    #[must_use]
    pub fn into_parts(self) -> (Location, AirQualityReading) {
        (self.location, self.reading)
    }

    /// One-line summary, e.g. "New Brunswick, NJ: AQI 42 (Good)"
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: AQI {} ({})",
            self.location.display_name(),
            self.reading.aqi(),
            self.reading.category()
        )
    }

    /// Encode as JSON. Non-finite coordinates are rejected since JSON cannot carry them.
    pub fn to_json(&self) -> Result<String> {
        if !self.location.latitude().is_finite() || !self.location.longitude().is_finite() {
            return Err(RuBreathingError::validation(format!(
                "coordinates ({}) for {} cannot be encoded as JSON",
                self.location.format_coordinates(),
                self.location.display_name()
            )));
        }
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let report = serde_json::from_str(json)?;
        Ok(report)
    }
}
