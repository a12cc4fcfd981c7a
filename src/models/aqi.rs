//! AQI severity bands and their conventional color scale

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity band an AQI value falls into (US EPA breakpoints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    /// Map an AQI value to its band. Values below zero count as `Good`.
    #[must_use]
    pub fn from_aqi(aqi: i32) -> Self {
        match aqi {
            i32::MIN..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=150 => Self::UnhealthyForSensitiveGroups,
            151..=200 => Self::Unhealthy,
            201..=300 => Self::VeryUnhealthy,
            _ => Self::Hazardous,
        }
    }

    /// Color label conventionally used for this band
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "Green",
            Self::Moderate => "Yellow",
            Self::UnhealthyForSensitiveGroups => "Orange",
            Self::Unhealthy => "Red",
            Self::VeryUnhealthy => "Purple",
            Self::Hazardous => "Maroon",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5, AqiCategory::Good)]
    #[case(0, AqiCategory::Good)]
    #[case(50, AqiCategory::Good)]
    #[case(51, AqiCategory::Moderate)]
    #[case(100, AqiCategory::Moderate)]
    #[case(101, AqiCategory::UnhealthyForSensitiveGroups)]
    #[case(150, AqiCategory::UnhealthyForSensitiveGroups)]
    #[case(151, AqiCategory::Unhealthy)]
    #[case(200, AqiCategory::Unhealthy)]
    #[case(201, AqiCategory::VeryUnhealthy)]
    #[case(300, AqiCategory::VeryUnhealthy)]
    #[case(301, AqiCategory::Hazardous)]
    #[case(999, AqiCategory::Hazardous)]
    fn test_band_boundaries(#[case] aqi: i32, #[case] expected: AqiCategory) {
        assert_eq!(AqiCategory::from_aqi(aqi), expected);
    }

    #[test]
    fn test_colors() {
        assert_eq!(AqiCategory::Good.color(), "Green");
        assert_eq!(AqiCategory::Unhealthy.color(), "Red");
        assert_eq!(AqiCategory::Hazardous.color(), "Maroon");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
    }

    #[test]
    fn test_ordering_follows_severity() {
        assert!(AqiCategory::Good < AqiCategory::Moderate);
        assert!(AqiCategory::VeryUnhealthy < AqiCategory::Hazardous);
    }
}
