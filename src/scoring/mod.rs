pub mod batch;
pub mod format;
pub mod sweep;

pub use batch::{score_batch, BatchTable, DEFAULT_PREDICTION_COLUMN};
pub use format::{format_price, round2};
pub use sweep::{sweep_area, AreaSweep, SweepResult};

use std::borrow::Borrow;

use log::debug;

use crate::{
    error::{PredictError, Result},
    models::FeatureRow,
    predictor::PriceModel,
};

/// Scores a single row.
pub fn score_one<M: PriceModel + ?Sized>(model: &M, row: &FeatureRow) -> Result<f64> {
    score_at(model, row, 0)
}

/// Scores every row in order. Output position `i` belongs to input row `i`.
///
/// Stops at the first row the model rejects.
pub fn score_many<M, I>(model: &M, rows: I) -> Result<Vec<f64>>
where
    M: PriceModel + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<FeatureRow>,
{
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| score_at(model, row.borrow(), index))
        .collect()
}

pub(crate) fn score_at<M: PriceModel + ?Sized>(
    model: &M,
    row: &FeatureRow,
    index: usize,
) -> Result<f64> {
    let price = model
        .predict(row)
        .map_err(|e| PredictError::ScoringFailed {
            row: index,
            reason: format!("{e:#}"),
        })?;
    debug!("row {index} ({}, {} sqft) -> {price}", row.location, row.area);
    Ok(price)
}
