//! Health advice derived from an AQI estimate and the raw readings.

pub mod age;
pub mod category;
pub mod pollutant;

pub use age::{adjust_suggestion, AgeGroup};
pub use category::{categorize, AqiCategory};
pub use pollutant::{major_pollutant, MajorPollutant};
