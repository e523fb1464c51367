use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::models::{FeatureRow, NUMERIC_COLUMNS};

use super::PriceModel;

/// Linear regression over the numeric columns with a one-hot encoded location.
///
/// Stored on disk as JSON:
///
/// ```json
/// {
///   "intercept": 12.5,
///   "coefficients": { "Area (sqft)": 0.04, "Bedrooms": 3.1, "Bathrooms": 2.0, "Age": -0.6 },
///   "location_offsets": { "Mumbai": 80.0, "Pune": 10.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub intercept: f64,
    #[serde(default)]
    pub coefficients: HashMap<String, f64>,
    #[serde(default)]
    pub location_offsets: HashMap<String, f64>,
}

impl LinearModel {
    /// Checks that every coefficient names a known column and every weight is finite.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.intercept.is_finite() {
            return Err("intercept is not a finite number".to_string());
        }

        let mut unknown: Vec<&str> = self
            .coefficients
            .keys()
            .map(String::as_str)
            .filter(|name| !NUMERIC_COLUMNS.contains(name))
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(format!("unknown coefficient columns: {}", unknown.join(", ")));
        }

        let non_finite = self
            .coefficients
            .iter()
            .chain(self.location_offsets.iter())
            .find(|(_, weight)| !weight.is_finite());
        if let Some((name, _)) = non_finite {
            return Err(format!("weight for '{name}' is not a finite number"));
        }

        Ok(())
    }

    /// Weights aligned with [`FeatureRow::numeric_features`]. Absent coefficients weigh 0.
    fn weights(&self) -> DVector<f64> {
        DVector::from_iterator(
            NUMERIC_COLUMNS.len(),
            NUMERIC_COLUMNS
                .iter()
                .map(|column| self.coefficients.get(*column).copied().unwrap_or(0.0)),
        )
    }
}

impl PriceModel for LinearModel {
    fn predict(&self, row: &FeatureRow) -> Result<f64> {
        let offset = self
            .location_offsets
            .get(&row.location)
            .copied()
            .ok_or_else(|| anyhow!("unseen location category '{}'", row.location))?;

        let features = DVector::from_row_slice(&row.numeric_features());
        let price = self.intercept + self.weights().dot(&features) + offset;

        if !price.is_finite() {
            bail!("model produced a non-finite prediction");
        }
        Ok(price)
    }
}
