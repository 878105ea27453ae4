use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::data::features::FeatureVector;
use crate::data::preprocessing::FeatureStats;
use crate::error::PredictionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    /// `(inputs, outputs)`
    pub weights: Array2<f64>,
    /// `(1, outputs)`
    pub bias: Array2<f64>,
}

/// Feed-forward regressor: ReLU hidden layers, one linear output unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionNetwork {
    pub layers: Vec<DenseLayer>,
    pub stats: Option<FeatureStats>,
}

fn relu(x: &Array2<f64>) -> Array2<f64> {
    x.mapv(|v| if v > 0.0 { v } else { 0.0 })
}

impl RegressionNetwork {
    pub fn new(layers: Vec<DenseLayer>, stats: Option<FeatureStats>) -> Self {
        RegressionNetwork { layers, stats }
    }

    /// Input width of the first layer, if there is one.
    pub fn input_size(&self) -> Option<usize> {
        self.layers.first().map(|l| l.weights.nrows())
    }

    fn check_shapes(&self, input_width: usize) -> Result<(), PredictionError> {
        let expected = self
            .input_size()
            .ok_or_else(|| PredictionError::Shape("network has no layers".into()))?;
        if expected != input_width {
            return Err(PredictionError::FeatureCount {
                expected,
                found: input_width,
            });
        }

        let mut width = input_width;
        for (i, layer) in self.layers.iter().enumerate() {
            let (rows, cols) = layer.weights.dim();
            if rows != width {
                return Err(PredictionError::Shape(format!(
                    "layer {} takes {} inputs but previous layer yields {}",
                    i, rows, width
                )));
            }
            if layer.bias.dim() != (1, cols) {
                return Err(PredictionError::Shape(format!(
                    "layer {} bias is {:?}, expected (1, {})",
                    i,
                    layer.bias.dim(),
                    cols
                )));
            }
            width = cols;
        }

        if width != 1 {
            return Err(PredictionError::Shape(format!(
                "output layer has {} units, expected 1",
                width
            )));
        }
        Ok(())
    }

    /// Forward pass over a `(rows, features)` batch.
    pub fn forward(&self, x: &Array2<f64>) -> Result<Array2<f64>, PredictionError> {
        self.check_shapes(x.ncols())?;

        let mut activation = match &self.stats {
            Some(stats) => stats.standardize(x)?,
            None => x.clone(),
        };
        let last = self.layers.len() - 1;
        for (i, layer) in self.layers.iter().enumerate() {
            let z = activation.dot(&layer.weights) + &layer.bias;
            activation = if i == last { z } else { relu(&z) };
        }
        Ok(activation)
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let output = self.forward(&features.to_row())?;
        tracing::debug!(?output, "network output");
        Ok(output[[0, 0]])
    }
}
