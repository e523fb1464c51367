use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::info;

use crate::{
    error::{PredictError, Result},
    models::{FeatureRow, COLUMNS},
    predictor::PriceModel,
};

use super::{format_price, score_at};

pub const DEFAULT_PREDICTION_COLUMN: &str = "Predicted Price";

/// A comma-separated table held fully in memory. Cells are kept as text so
/// columns the model does not use round-trip untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTable {
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl BatchTable {
    pub fn new(headers: StringRecord, records: Vec<StringRecord>) -> Self {
        Self { headers, records }
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { headers, records })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn records(&self) -> &[StringRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// All cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.records
                .iter()
                .map(|record| record.get(index).unwrap_or_default())
                .collect(),
        )
    }

    /// Required feature columns absent from the header, in model order.
    pub fn missing_columns(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .filter(|column| self.column_index(column).is_none())
            .map(|column| column.to_string())
            .collect()
    }

    /// Parses the record at `index` into a feature row.
    pub fn feature_row(&self, index: usize) -> Result<FeatureRow> {
        let record = self
            .records
            .get(index)
            .ok_or_else(|| PredictError::ScoringFailed {
                row: index,
                reason: "no such row".to_string(),
            })?;
        record
            .deserialize(Some(&self.headers))
            .map_err(|e| PredictError::ScoringFailed {
                row: index,
                reason: e.to_string(),
            })
    }

    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_csv(File::create(path)?)
    }

    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = vec![];
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Copy of the table with `values` in column `name`: replaced in place if
    /// the column exists, appended otherwise.
    fn with_column(&self, name: &str, values: Vec<String>) -> BatchTable {
        let existing = self.column_index(name);

        let mut headers = self.headers.clone();
        if existing.is_none() {
            headers.push_field(name);
        }

        let records: Vec<StringRecord> = self
            .records
            .iter()
            .zip(values)
            .map(|(record, value)| match existing {
                Some(index) => record
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| if i == index { value.as_str() } else { cell })
                    .collect::<StringRecord>(),
                None => {
                    let mut record = record.clone();
                    record.push_field(&value);
                    record
                }
            })
            .collect();

        BatchTable { headers, records }
    }
}

/// Scores every row of `table` and returns a copy with the rounded
/// prediction in `column`.
///
/// Fails before scoring anything if a required column is missing, and stops
/// at the first row that cannot be parsed or that the model rejects. The
/// input table is never modified.
pub fn score_batch<M: PriceModel + ?Sized>(
    model: &M,
    table: &BatchTable,
    column: &str,
) -> Result<BatchTable> {
    let missing = table.missing_columns();
    if !missing.is_empty() {
        return Err(PredictError::MissingColumns { columns: missing });
    }

    let mut predictions = Vec::with_capacity(table.len());
    for index in 0..table.len() {
        let row = table.feature_row(index)?;
        let price = score_at(model, &row, index)?;
        predictions.push(format_price(price));
    }

    info!("Predictions complete for {} rows", predictions.len());
    Ok(table.with_column(column, predictions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> BatchTable {
        BatchTable::from_reader(text.as_bytes()).unwrap()
    }

    #[test]
    fn reports_every_missing_column_in_model_order() {
        let t = table("Age,Location\n5,Pune\n");
        assert_eq!(
            t.missing_columns(),
            vec!["Area (sqft)", "Bedrooms", "Bathrooms"]
        );
    }

    #[test]
    fn reads_column_cells() {
        let t = table("Location,Area (sqft)\nPune,1200\nDelhi,800\n");
        assert_eq!(t.column("Location"), Some(vec!["Pune", "Delhi"]));
        assert_eq!(t.column("Age"), None);
    }

    #[test]
    fn parses_feature_row_ignoring_extra_columns() {
        let t = table("Id,Location,Area (sqft),Bedrooms,Bathrooms,Age\n7,Pune,1200,3,2,5\n");
        let row = t.feature_row(0).unwrap();
        assert_eq!(row, crate::models::build_row("Pune", 1200.0, 3, 2, 5));
    }

    #[test]
    fn unparseable_cell_is_a_scoring_failure() {
        let t = table("Location,Area (sqft),Bedrooms,Bathrooms,Age\nPune,big,3,2,5\n");
        match t.feature_row(0) {
            Err(PredictError::ScoringFailed { row, .. }) => assert_eq!(row, 0),
            other => panic!("expected ScoringFailed, got {other:?}"),
        }
    }

    #[test]
    fn count_cells_must_be_whole_non_negative_numbers() {
        let t = table(
            "Location,Area (sqft),Bedrooms,Bathrooms,Age\n\
             Pune,-250.5,9,2,70\n\
             Pune,1200,3.0,2,5\n\
             Pune,1200,3,2,-1\n",
        );

        let unusual = t.feature_row(0).unwrap();
        assert_eq!(unusual, crate::models::build_row("Pune", -250.5, 9, 2, 70));
        assert!(matches!(
            t.feature_row(1),
            Err(PredictError::ScoringFailed { row: 1, .. })
        ));
        assert!(matches!(
            t.feature_row(2),
            Err(PredictError::ScoringFailed { row: 2, .. })
        ));
    }
}
