//! House price estimation from a pre-trained regression model.
//!
//! The library builds feature rows from property attributes and scores them
//! one at a time, over an area sweep, or across a CSV table. The model is
//! loaded once and passed explicitly to every scoring call.

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod predictor;
pub mod scoring;

pub use error::{PredictError, Result};
pub use models::{build_row, FeatureRow};
pub use predictor::{load_model, LinearModel, PriceModel};
pub use scoring::{score_batch, score_many, score_one, sweep_area, BatchTable};
