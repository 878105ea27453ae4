use serde::Serialize;
use std::fmt;

/// AQI severity band, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

/// Inclusive upper bound of each band below Hazardous.
const UPPER_BOUNDS: [(f64, AqiCategory); 5] = [
    (50.0, AqiCategory::Good),
    (100.0, AqiCategory::Moderate),
    (150.0, AqiCategory::UnhealthyForSensitiveGroups),
    (200.0, AqiCategory::Unhealthy),
    (300.0, AqiCategory::VeryUnhealthy),
];

impl AqiCategory {
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Band for an AQI value. Boundaries belong to the lower band; anything
    /// at or below 50, negatives included, is Good. NaN fails every bound
    /// and lands in Hazardous.
    pub fn from_aqi(aqi: f64) -> Self {
        UPPER_BOUNDS
            .iter()
            .find(|(upper, _)| aqi <= *upper)
            .map(|&(_, category)| category)
            .unwrap_or(AqiCategory::Hazardous)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub fn base_suggestion(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory. Enjoy outdoor activities.",
            AqiCategory::Moderate => {
                "Air quality is acceptable. Sensitive people should take precautions."
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Sensitive groups should reduce prolonged outdoor exertion."
            }
            AqiCategory::Unhealthy => {
                "Everyone may experience health effects. Limit outdoor activities."
            }
            AqiCategory::VeryUnhealthy => {
                "Health alert: everyone may experience more serious effects. Avoid outdoor activities."
            }
            AqiCategory::Hazardous => {
                "Health warning of emergency conditions. Stay indoors and avoid exposure."
            }
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category name and base suggestion for an AQI value.
pub fn categorize(aqi: f64) -> (AqiCategory, &'static str) {
    let category = AqiCategory::from_aqi(aqi);
    (category, category.base_suggestion())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_lower_band() {
        assert_eq!(AqiCategory::from_aqi(50.0).name(), "Good");
        assert_eq!(AqiCategory::from_aqi(50.01).name(), "Moderate");
        assert_eq!(AqiCategory::from_aqi(100.0).name(), "Moderate");
        assert_eq!(
            AqiCategory::from_aqi(100.5).name(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(
            AqiCategory::from_aqi(150.0).name(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(AqiCategory::from_aqi(150.0001).name(), "Unhealthy");
        assert_eq!(AqiCategory::from_aqi(200.0).name(), "Unhealthy");
        assert_eq!(AqiCategory::from_aqi(200.1).name(), "Very Unhealthy");
        assert_eq!(AqiCategory::from_aqi(300.0).name(), "Very Unhealthy");
        assert_eq!(AqiCategory::from_aqi(300.01).name(), "Hazardous");
    }

    #[test]
    fn negative_aqi_is_good() {
        assert_eq!(AqiCategory::from_aqi(-12.0), AqiCategory::Good);
        assert_eq!(AqiCategory::from_aqi(f64::NEG_INFINITY), AqiCategory::Good);
    }

    #[test]
    fn extreme_values_are_hazardous() {
        assert_eq!(AqiCategory::from_aqi(1e9), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(f64::INFINITY), AqiCategory::Hazardous);
        assert_eq!(AqiCategory::from_aqi(f64::NAN), AqiCategory::Hazardous);
    }

    #[test]
    fn severity_never_decreases() {
        let mut previous = AqiCategory::from_aqi(-10.0);
        let mut aqi = -10.0;
        while aqi < 400.0 {
            let current = AqiCategory::from_aqi(aqi);
            assert!(current >= previous, "severity dropped at {}", aqi);
            previous = current;
            aqi += 0.25;
        }
        assert_eq!(previous, AqiCategory::Hazardous);
    }

    #[test]
    fn categorize_pairs_name_with_suggestion() {
        let (category, suggestion) = categorize(45.0);
        assert_eq!(category, AqiCategory::Good);
        assert_eq!(
            suggestion,
            "Air quality is satisfactory. Enjoy outdoor activities."
        );

        let (category, suggestion) = categorize(250.0);
        assert_eq!(category, AqiCategory::VeryUnhealthy);
        assert!(suggestion.starts_with("Health alert"));
    }

    #[test]
    fn every_band_has_distinct_text() {
        let mut names: Vec<_> = AqiCategory::ALL.iter().map(|c| c.name()).collect();
        let mut suggestions: Vec<_> = AqiCategory::ALL.iter().map(|c| c.base_suggestion()).collect();
        names.sort();
        names.dedup();
        suggestions.sort();
        suggestions.dedup();
        assert_eq!(names.len(), 6);
        assert_eq!(suggestions.len(), 6);
    }
}
