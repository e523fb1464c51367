use serde::{Deserialize, Serialize};

/// Column names in the order the model was trained on.
pub const COLUMNS: [&str; 5] = ["Location", "Area (sqft)", "Bedrooms", "Bathrooms", "Age"];

/// The numeric part of [`COLUMNS`], in the same order as [`FeatureRow::numeric_features`].
pub const NUMERIC_COLUMNS: [&str; 4] = ["Area (sqft)", "Bedrooms", "Bathrooms", "Age"];

pub const KNOWN_LOCATIONS: [&str; 10] = [
    "Mumbai",
    "Bengaluru",
    "Delhi",
    "Pune",
    "Hyderabad",
    "Chennai",
    "Ahmedabad",
    "Kolkata",
    "Jaipur",
    "Lucknow",
];

/// A single property as the model consumes it.
///
/// Serde names match the batch CSV headers, so a record with those headers
/// deserializes straight into a row and extra columns are ignored.
///
/// Accepted batch cells: `Area (sqft)` is any decimal number, negatives
/// included. `Bedrooms`, `Bathrooms` and `Age` are whole non-negative
/// numbers written without a fraction (`3`, not `3.0` or `-1`); any other
/// text cannot form a row and fails as a scoring error for that row.
/// Values that parse are handed to the model unchecked, however far they
/// fall outside the form's ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Area (sqft)")]
    pub area: f64,
    #[serde(rename = "Bedrooms")]
    pub bedrooms: u32,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: u32,
    #[serde(rename = "Age")]
    pub age: u32,
}

/// Assembles a feature row. Values are passed through without validation.
pub fn build_row(
    location: impl Into<String>,
    area: f64,
    bedrooms: u32,
    bathrooms: u32,
    age: u32,
) -> FeatureRow {
    FeatureRow {
        location: location.into(),
        area,
        bedrooms,
        bathrooms,
        age,
    }
}

impl FeatureRow {
    pub fn numeric_features(&self) -> [f64; 4] {
        [
            self.area,
            self.bedrooms as f64,
            self.bathrooms as f64,
            self.age as f64,
        ]
    }

    /// Same property with a different area, used for sensitivity sweeps.
    pub fn with_area(&self, area: f64) -> FeatureRow {
        FeatureRow {
            area,
            ..self.clone()
        }
    }

    /// Names of the columns whose value falls outside the range the form offers.
    ///
    /// Purely informational: scoring never rejects a row because of this.
    pub fn out_of_domain_columns(&self) -> Vec<&'static str> {
        let mut columns = vec![];
        if !KNOWN_LOCATIONS.contains(&self.location.as_str()) {
            columns.push(COLUMNS[0]);
        }
        if !(300.0..=10000.0).contains(&self.area) {
            columns.push(COLUMNS[1]);
        }
        if !(1..=5).contains(&self.bedrooms) {
            columns.push(COLUMNS[2]);
        }
        if !(1..=4).contains(&self.bathrooms) {
            columns.push(COLUMNS[3]);
        }
        if self.age > 50 {
            columns.push(COLUMNS[4]);
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_area_keeps_other_fields() {
        let row = build_row("Delhi", 900.0, 2, 1, 10);
        let swept = row.with_area(2500.0);
        assert_eq!(swept.area, 2500.0);
        assert_eq!(swept.location, "Delhi");
        assert_eq!((swept.bedrooms, swept.bathrooms, swept.age), (2, 1, 10));
    }

    #[test]
    fn flags_values_outside_form_ranges() {
        assert!(build_row("Pune", 1200.0, 3, 2, 5)
            .out_of_domain_columns()
            .is_empty());

        let row = build_row("Springfield", -10.0, 7, 2, 80);
        assert_eq!(
            row.out_of_domain_columns(),
            vec!["Location", "Area (sqft)", "Bedrooms", "Age"]
        );
    }
}
