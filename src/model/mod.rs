//! Prediction model seam.
//!
//! Everything downstream of the feature vector talks to an [`AqiPredictor`].
//! The shipped implementation is [`AqiModel`], decoded once from a bincode
//! artifact; tests plug in fixed-value stubs instead.

pub mod linear;
pub mod network;

use serde::{Deserialize, Serialize};

use crate::data::features::{FeatureVector, FEATURE_NAMES};
use crate::error::PredictionError;

pub use linear::LinearRegressor;
pub use network::{DenseLayer, RegressionNetwork};

/// Anything that turns a feature vector into an AQI estimate.
pub trait AqiPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}

/// A trained regression model as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AqiModel {
    Linear(LinearRegressor),
    Network(RegressionNetwork),
}

impl AqiModel {
    pub fn kind(&self) -> &'static str {
        match self {
            AqiModel::Linear(_) => "linear",
            AqiModel::Network(_) => "network",
        }
    }
}

impl AqiPredictor for AqiModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let named: Vec<_> = FEATURE_NAMES.iter().zip(features.values()).collect();
        tracing::debug!(features = ?named, model = self.kind(), "raw features");
        match self {
            AqiModel::Linear(m) => m.predict(features),
            AqiModel::Network(m) => m.predict(features),
        }
    }
}

impl<P: AqiPredictor + ?Sized> AqiPredictor for &P {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }
}
