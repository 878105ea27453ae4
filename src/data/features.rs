use ndarray::{Array1, Array2};

use crate::data::reading::SensorReading;

/// Number of model inputs.
pub const FEATURE_COUNT: usize = 7;

/// Column labels the model was trained with, in input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "NO2 ppb", "O3 ppb", "CO ppm", "PM2.5", "PM10", "TempC", "Humidity",
];

/// Model input in training column order.
///
/// The order must match [`FEATURE_NAMES`]; a reordered vector still
/// predicts, just wrongly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Single-row matrix, the shape the network forward pass takes.
    pub fn to_row(&self) -> Array2<f64> {
        Array2::from_shape_fn((1, FEATURE_COUNT), |(_, j)| self.0[j])
    }

    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.0.to_vec())
    }
}

impl From<&SensorReading> for FeatureVector {
    fn from(reading: &SensorReading) -> Self {
        assemble(reading)
    }
}

/// Lay out a reading in model column order. Values pass through untouched.
pub fn assemble(reading: &SensorReading) -> FeatureVector {
    FeatureVector([
        reading.no2,
        reading.o3,
        reading.co,
        reading.pm25,
        reading.pm10,
        reading.temperature,
        reading.humidity,
    ])
}
