use serde::{Deserialize, Serialize};

use crate::{error::Result, models::FeatureRow, predictor::PriceModel};

use super::score_many;

/// Upper bound on the number of sampled areas in one sweep.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Inclusive range of areas sampled for the price sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaSweep {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for AreaSweep {
    fn default() -> Self {
        Self {
            start: 500.0,
            end: 5000.0,
            step: 500.0,
        }
    }
}

impl AreaSweep {
    /// Sampled areas from `start` up to and including `end`.
    ///
    /// Empty when the step is not positive, the range is reversed, or the
    /// range would need more than [`MAX_SWEEP_POINTS`] samples.
    pub fn areas(&self) -> Vec<f64> {
        let valid = self.step.is_finite()
            && self.step > 0.0
            && self.start.is_finite()
            && self.end.is_finite()
            && self.end >= self.start;
        if !valid {
            return vec![];
        }

        // Tolerance so float division does not drop the end point.
        let intervals = ((self.end - self.start) / self.step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
            return vec![];
        }
        let count = intervals as usize + 1;
        (0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect()
    }
}

/// Parallel area and price sequences, ready to plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub areas: Vec<f64>,
    pub prices: Vec<f64>,
}

impl SweepResult {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.areas.iter().copied().zip(self.prices.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

/// Scores `base` at every area in `sweep`, keeping its other fields fixed.
pub fn sweep_area<M: PriceModel + ?Sized>(
    model: &M,
    base: &FeatureRow,
    sweep: &AreaSweep,
) -> Result<SweepResult> {
    let areas = sweep.areas();
    let prices = score_many(model, areas.iter().map(|&area| base.with_area(area)))?;
    Ok(SweepResult { areas, prices })
}
