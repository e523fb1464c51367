//! Error types returned by model loading and scoring.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the presentation layer.
#[derive(Error, Debug)]
pub enum PredictError {
    /// The model artifact is missing or could not be read.
    #[error("model file not found: {}", path.display())]
    ModelNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The artifact was read but does not describe a usable model.
    #[error("model file {} is not a valid model: {reason}", path.display())]
    InvalidModel { path: PathBuf, reason: String },

    /// A batch table lacks one or more of the required feature columns.
    #[error("CSV must have columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// The model rejected a row. `row` is the zero-based position in the input.
    #[error("scoring failed for row {row}: {reason}")]
    ScoringFailed { row: usize, reason: String },

    #[error("malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PredictError>;
