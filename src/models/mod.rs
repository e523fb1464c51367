pub mod feature_row;

pub use feature_row::{build_row, FeatureRow, COLUMNS, KNOWN_LOCATIONS, NUMERIC_COLUMNS};
