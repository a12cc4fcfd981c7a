//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

use crate::{Result, RuBreathingError};

/// Highest decimal precision honored by [`Location::rounded_coordinates`]
pub const MAX_COORDINATE_PRECISION: u32 = 15;

/// Geographic point with the state and city it belongs to
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    state: String,
    city: String,
    /// Latitude in decimal degrees
    latitude: f64,
    /// Longitude in decimal degrees
    longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(state: String, city: String, latitude: f64, longitude: f64) -> Self {
        Self {
            state,
            city,
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: String) {
        self.state = state;
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn set_city(&mut self, city: String) {
        self.city = city;
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn set_latitude(&mut self, latitude: f64) {
        self.latitude = latitude;
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn set_longitude(&mut self, longitude: f64) {
        self.longitude = longitude;
    }

    /// "City, State"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Round coordinates to `precision` decimal places.
    ///
    /// `precision` is clamped to [`MAX_COORDINATE_PRECISION`]; f64 carries no more
    /// meaningful decimals than that.
    #[must_use]
    pub fn rounded_coordinates(&self, precision: u32) -> (f64, f64) {
        let precision = precision.min(MAX_COORDINATE_PRECISION);
        let multiplier = 10_f64.powi(precision as i32);
        let lat = (self.latitude * multiplier).round() / multiplier;
        let lon = (self.longitude * multiplier).round() / multiplier;
        (lat, lon)
    }

    /// Whether latitude is within [-90, 90] and longitude within [-180, 180]
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Opt-in range check. Never called by the setters.
    pub fn validate(&self) -> Result<()> {
        if self.has_valid_coordinates() {
            return Ok(());
        }
        tracing::debug!(
            latitude = self.latitude,
            longitude = self.longitude,
            "Coordinates out of range"
        );
        Err(RuBreathingError::validation(format!(
            "coordinates ({}) for {} are out of range",
            self.format_coordinates(),
            self.display_name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_brunswick() -> Location {
        Location::new("NJ".to_string(), "New Brunswick".to_string(), 40.5, -74.45)
    }

    #[test]
    fn test_constructor_round_trip() {
        let location = new_brunswick();
        assert_eq!(location.state(), "NJ");
        assert_eq!(location.city(), "New Brunswick");
        assert_eq!(location.latitude(), 40.5);
        assert_eq!(location.longitude(), -74.45);
    }

    #[test]
    fn test_setters_replace_values() {
        let mut location = new_brunswick();
        location.set_state("NY".to_string());
        location.set_city("Ithaca".to_string());
        location.set_latitude(42.44);
        location.set_longitude(-76.5);

        assert_eq!(location.state(), "NY");
        assert_eq!(location.city(), "Ithaca");
        assert_eq!(location.latitude(), 42.44);
        assert_eq!(location.longitude(), -76.5);
    }

    #[test]
    fn test_setters_do_not_validate() {
        let mut location = new_brunswick();
        location.set_latitude(123.0);
        location.set_city(String::new());
        assert_eq!(location.latitude(), 123.0);
        assert!(location.city().is_empty());
        assert!(!location.has_valid_coordinates());
    }

    #[test]
    fn test_display_and_formatting() {
        let location = new_brunswick();
        assert_eq!(location.display_name(), "New Brunswick, NJ");
        assert_eq!(location.format_coordinates(), "40.5000, -74.4500");
    }

    #[test]
    fn test_location_rounded_coordinates() {
        let location = Location::new("NJ".to_string(), "Piscataway".to_string(), 40.554_321, -74.463_789);
        let (lat, lon) = location.rounded_coordinates(2);
        assert_eq!(lat, 40.55);
        assert_eq!(lon, -74.46);
    }

    #[test]
    fn test_rounded_coordinates_clamps_precision() {
        let location = new_brunswick();
        let (lat, lon) = location.rounded_coordinates(400);
        assert_eq!((lat, lon), location.rounded_coordinates(MAX_COORDINATE_PRECISION));
        assert!(lat.is_finite() && lon.is_finite());
        assert_eq!(location.rounded_coordinates(u32::MAX), (lat, lon));
        assert!((lat - 40.5).abs() < 1e-9);
        assert!((lon + 74.45).abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        let mut location = new_brunswick();
        assert!(location.validate().is_ok());

        location.set_longitude(-200.0);
        let err = location.validate().unwrap_err();
        assert!(matches!(err, RuBreathingError::Validation { .. }));
        assert!(err.to_string().contains("New Brunswick, NJ"));

        location.set_longitude(f64::NAN);
        assert!(location.validate().is_err());
    }
}
