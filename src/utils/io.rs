use std::path::Path;

use crate::error::ModelError;
use crate::model::AqiModel;

pub fn save_model(path: &Path, model: &AqiModel) -> Result<(), ModelError> {
    let model_data = bincode::serialize(model).map_err(ModelError::Encode)?;
    std::fs::write(path, model_data).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn load_model(path: &Path) -> Result<AqiModel, ModelError> {
    let model_data = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let model: AqiModel = bincode::deserialize(&model_data).map_err(|source| ModelError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), kind = model.kind(), "model loaded");
    Ok(model)
}
