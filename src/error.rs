use std::path::PathBuf;
use thiserror::Error;

/// Model artifact could not be read or decoded. Fatal at startup.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode model file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to encode model: {0}")]
    Encode(#[source] bincode::Error),
}

/// The model rejected the feature vector.
#[derive(Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("model expects {expected} features, got {found}")]
    FeatureCount { expected: usize, found: usize },
    #[error("malformed model: {0}")]
    Shape(String),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before a value was entered")]
    Eof,
}

#[derive(Debug, Error)]
pub enum AqiError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Prediction(#[from] PredictionError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("line {line}: {source}")]
    BatchRow {
        line: u64,
        #[source]
        source: InputError,
    },
    #[error("prediction failed for line {line}: {source}")]
    BatchPrediction {
        line: u64,
        #[source]
        source: PredictionError,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
