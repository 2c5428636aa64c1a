use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame, DataType};

use churn_model::PrepConfig;
use churn_transform::{TransformError, check_required_columns, transform};

fn raw_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            "customerID".into(),
            vec!["7590-A", "5575-B", "3668-C", "7795-D", "9237-E", "9305-F"],
        ),
        Column::new(
            "gender".into(),
            vec!["Female", "Male", "Male", "Male", "Female", "Female"],
        ),
        Column::new("tenure".into(), vec![1i64, 34, 2, 45, 60, 72]),
        Column::new(
            "MonthlyCharges".into(),
            vec![29.85f64, 56.95, 53.85, 42.3, 70.7, 99.65],
        ),
        Column::new(
            "TotalCharges".into(),
            vec!["29.85", "1889.5", "108.15", " ", "3046.05", "7104.2"],
        ),
        Column::new(
            "Contract".into(),
            vec![
                "Month-to-month",
                "One year",
                "Month-to-month",
                "Two year",
                "Month-to-month",
                "One year",
            ],
        ),
        Column::new("Churn".into(), vec!["No", "No", "Yes", "No", "Yes", "No"]),
    ])
    .unwrap()
}

#[test]
fn end_to_end_produces_a_fully_numeric_table() {
    let output = transform(raw_frame(), &PrepConfig::default()).unwrap();
    let df = &output.data;

    assert_eq!(df.height(), 6);
    assert!(df.column("customerID").is_err());
    assert!(df.column("gender").is_err());
    assert!(df.column("Contract").is_err());
    assert!(df.column("TenureGroup").is_err());

    for column in df.get_columns() {
        assert!(
            column.dtype().is_primitive_numeric(),
            "column {} is not numeric: {}",
            column.name(),
            column.dtype()
        );
    }
}

#[test]
fn row_count_is_preserved_and_blank_charges_are_defaulted() {
    let output = transform(raw_frame(), &PrepConfig::default()).unwrap();

    assert_eq!(output.data.height(), 6);
    assert_eq!(output.coerced_cells, 1);
}

#[test]
fn target_is_binary_encoded_no_before_yes() {
    let output = transform(raw_frame(), &PrepConfig::default()).unwrap();

    assert_eq!(output.target_mapping.get("No"), Some(&0));
    assert_eq!(output.target_mapping.get("Yes"), Some(&1));

    let codes: Vec<i64> = output
        .data
        .column("Churn")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect();
    assert_eq!(codes, vec![0, 0, 1, 0, 1, 0]);
}

#[test]
fn numeric_columns_are_standardized() {
    let output = transform(raw_frame(), &PrepConfig::default()).unwrap();

    assert_eq!(output.scalers.len(), 3);
    for params in &output.scalers {
        let values: Vec<f64> = output
            .data
            .column(&params.column)
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
        let variance: f64 =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        assert!(mean.abs() < 1e-9, "{} mean {mean}", params.column);
        assert!(
            (variance - 1.0).abs() < 1e-9,
            "{} variance {variance}",
            params.column
        );
    }
}

#[test]
fn categoricals_expand_to_one_less_indicator_than_levels() {
    let output = transform(raw_frame(), &PrepConfig::default()).unwrap();

    // gender has 2 levels, Contract 3, TenureGroup 3: 1 + 2 + 2 indicators.
    assert_eq!(output.indicator_columns.len(), 5);

    let names: BTreeSet<&str> = output
        .indicator_columns
        .iter()
        .map(String::as_str)
        .collect();
    assert!(names.contains("gender_Male"));
    assert!(!names.contains("gender_Female"));
    assert!(names.contains("Contract_One year"));
    assert!(names.contains("Contract_Two year"));
    assert!(!names.contains("Contract_Month-to-month"));
    assert!(names.contains("TenureGroup_Existing"));
    assert!(names.contains("TenureGroup_Loyal"));
    assert!(!names.contains("TenureGroup_New"));

    for name in &output.indicator_columns {
        assert_eq!(output.data.column(name).unwrap().dtype(), &DataType::Int32);
    }
}

#[test]
fn missing_required_column_fails_before_any_stage() {
    let df = raw_frame().drop("Churn").unwrap();

    let error = transform(df, &PrepConfig::default()).unwrap_err();

    assert!(matches!(error, TransformError::MissingColumn(name) if name == "Churn"));
}

#[test]
fn check_required_columns_accepts_a_complete_frame() {
    assert!(check_required_columns(&raw_frame()).is_ok());
}
