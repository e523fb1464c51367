#[cfg(test)]
mod scoring_tests {
    use std::cell::Cell;

    use anyhow::{bail, Result};
    use house_price::{
        build_row,
        models::{FeatureRow, COLUMNS},
        scoring::{format_price, score_many, score_one, sweep_area, AreaSweep},
        PredictError,
    };

    fn area_model(row: &FeatureRow) -> Result<f64> {
        Ok(row.area / 100.0 + row.bedrooms as f64)
    }

    #[test]
    fn build_row_reproduces_inputs() {
        let row = build_row("Pune", 1200.0, 3, 2, 5);
        assert_eq!(row.location, "Pune");
        assert_eq!(row.area, 1200.0);
        assert_eq!(row.bedrooms, 3);
        assert_eq!(row.bathrooms, 2);
        assert_eq!(row.age, 5);
        assert_eq!(row, build_row("Pune", 1200.0, 3, 2, 5));
    }

    #[test]
    fn row_serializes_in_model_column_order() {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.serialize(build_row("Pune", 1200.0, 3, 2, 5)).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn stub_model_result_is_displayed_with_two_decimals() {
        let stub = |_: &FeatureRow| -> Result<f64> { Ok(42.123) };
        let price = score_one(&stub, &build_row("Pune", 1200.0, 3, 2, 5)).unwrap();
        assert_eq!(format_price(price), "42.12");
    }

    #[test]
    fn sweep_returns_one_price_per_area_in_order() {
        let base = build_row("Mumbai", 1000.0, 2, 1, 3);
        let result = sweep_area(&area_model, &base, &AreaSweep::default()).unwrap();

        assert_eq!(result.len(), 10);
        assert_eq!(result.prices.len(), result.areas.len());
        for (area, price) in result.points() {
            assert_eq!(price, area / 100.0 + 2.0);
        }
    }

    #[test]
    fn score_many_preserves_order() {
        let rows: Vec<FeatureRow> = [900.0, 300.0, 4500.0]
            .iter()
            .map(|&area| build_row("Delhi", area, 1, 1, 0))
            .collect();
        let prices = score_many(&area_model, &rows).unwrap();
        assert_eq!(prices, vec![10.0, 4.0, 46.0]);
    }

    #[test]
    fn score_many_of_nothing_is_empty() {
        let prices = score_many(&area_model, Vec::<FeatureRow>::new()).unwrap();
        assert!(prices.is_empty());
    }

    #[test]
    fn first_rejected_row_halts_scoring() {
        let calls = Cell::new(0);
        let picky = |row: &FeatureRow| -> Result<f64> {
            calls.set(calls.get() + 1);
            if row.area == 1500.0 {
                bail!("area not supported");
            }
            Ok(1.0)
        };

        let base = build_row("Pune", 500.0, 2, 2, 1);
        let err = sweep_area(&picky, &base, &AreaSweep::default()).unwrap_err();

        match err {
            PredictError::ScoringFailed { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("area not supported"));
            }
            other => panic!("expected ScoringFailed, got {other:?}"),
        }
        assert_eq!(calls.get(), 3);
    }
}
