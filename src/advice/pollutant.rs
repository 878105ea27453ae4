use serde::Serialize;

use crate::data::reading::{Pollutant, SensorReading};

/// The pollutant with the highest raw reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MajorPollutant {
    pub pollutant: Pollutant,
    pub value: f64,
}

/// Pick the largest reading. Ties go to the earliest pollutant in
/// NO2, O3, CO, PM2.5, PM10 order. A NaN reading never wins unless every
/// reading is NaN, in which case NO2 is reported.
pub fn major_pollutant(readings: &[(Pollutant, f64); 5]) -> MajorPollutant {
    let (pollutant, value) = readings[1..]
        .iter()
        .fold(readings[0], |best, &(p, v)| {
            if v > best.1 || (best.1.is_nan() && !v.is_nan()) {
                (p, v)
            } else {
                best
            }
        });
    MajorPollutant { pollutant, value }
}

impl From<&SensorReading> for MajorPollutant {
    fn from(reading: &SensorReading) -> Self {
        major_pollutant(&reading.pollutants())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings(no2: f64, o3: f64, co: f64, pm25: f64, pm10: f64) -> [(Pollutant, f64); 5] {
        SensorReading {
            no2,
            o3,
            co,
            pm25,
            pm10,
            ..SensorReading::default()
        }
        .pollutants()
    }

    #[test]
    fn clear_maximum_wins() {
        let major = major_pollutant(&readings(5.0, 20.0, 0.1, 8.0, 3.0));
        assert_eq!(major.pollutant.as_str(), "O3");
        assert_eq!(major.value, 20.0);
    }

    #[test]
    fn default_form_reports_pm10() {
        let major = MajorPollutant::from(&SensorReading::default());
        assert_eq!(major.pollutant, Pollutant::Pm10);
        assert_eq!(major.value, 30.0);
    }

    #[test]
    fn ties_go_to_earliest_in_fixed_order() {
        let major = major_pollutant(&readings(10.0, 10.0, 0.0, 0.0, 0.0));
        assert_eq!(major.pollutant, Pollutant::No2);

        let major = major_pollutant(&readings(1.0, 2.0, 0.0, 7.0, 7.0));
        assert_eq!(major.pollutant, Pollutant::Pm25);

        let major = major_pollutant(&readings(0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(major.pollutant, Pollutant::No2);
    }

    #[test]
    fn negative_readings_still_rank() {
        let major = major_pollutant(&readings(-5.0, -1.0, -3.0, -2.0, -4.0));
        assert_eq!(major.pollutant, Pollutant::O3);
        assert_eq!(major.value, -1.0);
    }

    #[test]
    fn nan_never_beats_a_number() {
        let major = major_pollutant(&readings(f64::NAN, 2.0, f64::NAN, 1.0, 0.5));
        assert_eq!(major.pollutant, Pollutant::O3);

        let all_nan = major_pollutant(&[f64::NAN; 5].map(|v| (Pollutant::Co, v)));
        assert!(all_nan.value.is_nan());
    }
}
