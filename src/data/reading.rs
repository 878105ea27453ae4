use serde::Serialize;
use std::fmt;

/// One set of sensor readings as entered by the user.
///
/// Values are taken as-is: nothing here rejects negative or implausible
/// concentrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// NO2 in ppb
    pub no2: f64,
    /// O3 in ppb
    pub o3: f64,
    /// CO in ppm
    pub co: f64,
    /// PM2.5 in µg/m³
    pub pm25: f64,
    /// PM10 in µg/m³
    pub pm10: f64,
    /// Temperature in °C
    pub temperature: f64,
    /// Relative humidity in %
    pub humidity: f64,
}

impl Default for SensorReading {
    fn default() -> Self {
        SensorReading {
            no2: 10.0,
            o3: 10.0,
            co: 0.5,
            pm25: 20.0,
            pm10: 30.0,
            temperature: 25.0,
            humidity: 50.0,
        }
    }
}

impl SensorReading {
    /// Raw pollutant readings in ranking order.
    pub fn pollutants(&self) -> [(Pollutant, f64); 5] {
        [
            (Pollutant::No2, self.no2),
            (Pollutant::O3, self.o3),
            (Pollutant::Co, self.co),
            (Pollutant::Pm25, self.pm25),
            (Pollutant::Pm10, self.pm10),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserProfile {
    pub age: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile { age: 25 }
    }
}

/// Pollutants tracked for the major-pollutant report.
///
/// Variant order is the tie-break order used by the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    #[serde(rename = "NO2")]
    No2,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
}

impl Pollutant {
    pub const ALL: [Pollutant; 5] = [
        Pollutant::No2,
        Pollutant::O3,
        Pollutant::Co,
        Pollutant::Pm25,
        Pollutant::Pm10,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::No2 => "NO2",
            Pollutant::O3 => "O3",
            Pollutant::Co => "CO",
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_values() {
        let reading = SensorReading::default();
        assert_eq!(reading.no2, 10.0);
        assert_eq!(reading.o3, 10.0);
        assert_eq!(reading.co, 0.5);
        assert_eq!(reading.pm25, 20.0);
        assert_eq!(reading.pm10, 30.0);
        assert_eq!(reading.temperature, 25.0);
        assert_eq!(reading.humidity, 50.0);
        assert_eq!(UserProfile::default().age, 25);
    }

    #[test]
    fn pollutants_follow_fixed_order() {
        let names: Vec<_> = SensorReading::default()
            .pollutants()
            .iter()
            .map(|(p, _)| p.as_str())
            .collect();
        assert_eq!(names, vec!["NO2", "O3", "CO", "PM2.5", "PM10"]);
        let order: Vec<_> = SensorReading::default().pollutants().map(|(p, _)| p).to_vec();
        assert_eq!(order, Pollutant::ALL.to_vec());
    }

    #[test]
    fn pollutant_serializes_as_display_name() {
        let json = serde_json::to_string(&Pollutant::Pm25).unwrap();
        assert_eq!(json, "\"PM2.5\"");
    }
}
