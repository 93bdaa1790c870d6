// File: crates/scatter-core/tests/dataset.rs
// Purpose: CSV loading, strict numeric validation and field naming.

use scatter_core::{ChartError, Dataset, Field, Record};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/health.csv");

#[test]
fn loads_sample_file_and_ignores_extra_columns() {
    let ds = Dataset::from_path(SAMPLE).expect("load sample");
    assert_eq!(ds.len(), 10);
    let al = &ds.records()[0];
    assert_eq!(al.state, "Alabama");
    assert_eq!(al.abbr, "AL");
    assert_eq!(al.smokes, 21.1);
    assert_eq!(al.age, 38.6);
    assert_eq!(ds.extent(Field::Smokes), (12.0, 24.7));
    assert_eq!(ds.extent(Field::Age), (33.3, 41.6));
}

#[test]
fn headers_are_case_insensitive_and_cells_trimmed() {
    let csv = "State, ABBR ,Smokes,AGE\nOhio , OH, 21.6 ,39.3\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("parse");
    let r = &ds.records()[0];
    assert_eq!((r.state.as_str(), r.abbr.as_str()), ("Ohio", "OH"));
    assert_eq!((r.smokes, r.age), (21.6, 39.3));
}

#[test]
fn missing_column_is_reported_by_name() {
    let csv = "state,abbr,age\nOhio,OH,39.3\n";
    match Dataset::from_reader(csv.as_bytes()) {
        Err(ChartError::MissingColumn(name)) => assert_eq!(name, "smokes"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unparsable_value_identifies_record_and_field() {
    let csv = "state,abbr,smokes,age\nOhio,OH,21.6,39.3\nUtah,UT,n/a,30.5\n";
    match Dataset::from_reader(csv.as_bytes()) {
        Err(ChartError::InvalidRecord { line, state, field, value, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(state, "Utah");
            assert_eq!(field, Field::Smokes);
            assert_eq!(value, "n/a");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn empty_negative_and_non_finite_values_are_rejected() {
    for bad in ["", "-1", "NaN", "inf"] {
        let csv = format!("state,abbr,smokes,age\nOhio,OH,21.6,{bad}\n");
        let err = Dataset::from_reader(csv.as_bytes()).expect_err(bad);
        assert!(
            matches!(err, ChartError::InvalidRecord { field: Field::Age, .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn header_only_input_is_an_empty_dataset() {
    let csv = "state,abbr,smokes,age\n";
    assert!(matches!(Dataset::from_reader(csv.as_bytes()), Err(ChartError::EmptyDataset)));
    assert!(matches!(Dataset::new(Vec::new()), Err(ChartError::EmptyDataset)));
}

#[test]
fn programmatic_records_are_validated_too() {
    let err = Dataset::new(vec![Record::new("A", "A1", f64::NAN, 30.0)]).expect_err("nan");
    assert!(matches!(err, ChartError::InvalidRecord { line: 1, field: Field::Smokes, .. }));
}

#[test]
fn short_row_reports_the_missing_field() {
    let csv = "state,abbr,smokes,age\nOhio,OH,21.6,39.3\nUtah,UT,20.0\n";
    let err = Dataset::from_reader(csv.as_bytes()).expect_err("short row");
    match err {
        ChartError::InvalidRecord { line, state, field, reason, .. } => {
            assert_eq!(line, 3);
            assert_eq!(state, "Utah");
            assert_eq!(field, Field::Age);
            assert_eq!(reason, "empty value");
        }
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}

#[test]
fn field_names_parse_and_label() {
    assert_eq!("smokes".parse::<Field>().unwrap(), Field::Smokes);
    assert_eq!(" AGE ".parse::<Field>().unwrap(), Field::Age);
    assert!(matches!("income".parse::<Field>(), Err(ChartError::UnknownField(_))));
    assert_eq!(Field::Smokes.label(), "Smokes (%)");
    assert_eq!(Field::Age.to_string(), "age");
}
