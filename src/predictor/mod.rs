//! The scoring seam: anything that turns a [`FeatureRow`] into a price.

pub mod linear_model;
pub mod loader;

pub use linear_model::LinearModel;
pub use loader::load_model;

use crate::models::FeatureRow;

/// A pre-trained price model. Implementations are read-only once loaded.
pub trait PriceModel {
    /// Predicted price for one row. Errors are opaque to the caller and are
    /// reported as a scoring failure for that row.
    fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64>;
}

impl<F> PriceModel for F
where
    F: Fn(&FeatureRow) -> anyhow::Result<f64>,
{
    fn predict(&self, row: &FeatureRow) -> anyhow::Result<f64> {
        self(row)
    }
}
