use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::PredictionError;

/// Per-feature standardization captured when the model was fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl FeatureStats {
    /// Standardize a `(rows, features)` matrix column-wise.
    pub fn standardize(&self, input: &Array2<f64>) -> Result<Array2<f64>, PredictionError> {
        let width = input.ncols();
        if self.mean.len() != width || self.std.len() != width {
            return Err(PredictionError::Shape(format!(
                "normalization stats cover {}/{} features, input has {}",
                self.mean.len(),
                self.std.len(),
                width
            )));
        }
        let mean = self.mean.view().insert_axis(Axis(0));
        let std = self.std.view().insert_axis(Axis(0));
        Ok((input - &mean) / &std)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn standardize_centers_and_scales() {
        let stats = FeatureStats {
            mean: array![10.0, 0.0],
            std: array![2.0, 4.0],
        };
        let out = stats.standardize(&array![[14.0, -8.0]]).unwrap();
        assert_abs_diff_eq!(out[[0, 0]], 2.0);
        assert_abs_diff_eq!(out[[0, 1]], -2.0);
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let stats = FeatureStats {
            mean: array![0.0, 0.0],
            std: array![1.0, 1.0],
        };
        let err = stats.standardize(&array![[1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(err, PredictionError::Shape(_)));
    }
}
