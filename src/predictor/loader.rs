use std::{fs, path::Path};

use log::info;

use crate::error::{PredictError, Result};

use super::LinearModel;

pub const DEFAULT_MODEL_PATH: &str = "model.json";

/// Reads and deserializes the model artifact at `path`.
///
/// A missing or unreadable file is always `ModelNotFound`; the caller never
/// gets a model it has to null-check.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<LinearModel> {
    let path = path.as_ref();
    info!("Loading model from {}", path.display());

    let bytes = fs::read(path).map_err(|source| PredictError::ModelNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let model: LinearModel =
        serde_json::from_slice(&bytes).map_err(|e| PredictError::InvalidModel {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    model
        .validate()
        .map_err(|reason| PredictError::InvalidModel {
            path: path.to_path_buf(),
            reason,
        })?;

    info!(
        "Model loaded: {} coefficients, {} locations",
        model.coefficients.len(),
        model.location_offsets.len()
    );
    Ok(model)
}
