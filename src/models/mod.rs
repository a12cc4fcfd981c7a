//! Data models for the `RUBreathing` application
//!
//! This module contains the core domain models organized by concern:
//! - Air quality: pollution measurement snapshots and AQI bands
//! - Location: state, city and coordinates
//! - Report: a reading paired with the location it was taken at

pub mod air_quality;
pub mod aqi;
pub mod location;
pub mod report;

// Re-export all public types for convenient access
pub use air_quality::{AirQualityReading, DEFAULT_MAX_AQI};
pub use aqi::AqiCategory;
pub use location::Location;
pub use report::AirQualityReport;
