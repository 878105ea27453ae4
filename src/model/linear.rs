use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::data::features::{FeatureVector, FEATURE_COUNT};
use crate::data::preprocessing::FeatureStats;
use crate::error::PredictionError;

/// Ordinary linear regression: `aqi = w · x + b`, optionally on
/// standardized inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub weights: Array1<f64>,
    pub intercept: f64,
    pub stats: Option<FeatureStats>,
}

impl LinearRegressor {
    pub fn new(weights: Array1<f64>, intercept: f64) -> Self {
        LinearRegressor {
            weights,
            intercept,
            stats: None,
        }
    }

    pub fn with_stats(mut self, stats: FeatureStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        if self.weights.len() != FEATURE_COUNT {
            return Err(PredictionError::FeatureCount {
                expected: self.weights.len(),
                found: FEATURE_COUNT,
            });
        }

        let input = match &self.stats {
            Some(stats) => stats.standardize(&features.to_row())?.row(0).to_owned(),
            None => features.to_array(),
        };
        tracing::debug!(?input, "linear model input");

        Ok(self.weights.dot(&input) + self.intercept)
    }
}
