//! End-to-end: generated text through to rendered reports.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use tcgen_report::{render, ReportFormat, RenderOptions, Sheet, SheetLayout};
use tcgen_source::{specification_from_generated, GenerationEnvelope};
use tcgen_tests::prelude::*;

const GENERATED: &str = r#"Sure! Here is the specification.
{
  "functionCode": "PAY_02",
  "functionName": "computeBonus",
  "createdBy": "Nguyen",
  "testRequirement": "Bonus depends on monthly income and years of service",
  "fields": [
    {"name": "income", "type": "int", "min": 1000, "max": 100000},
    {"name": "years", "type": "int", "min": 0, "max": 40},
    {"name": "rating", "type": "int", "min": 1, "max": 5}
  ],
  "returnConditions": [],
  "logMessages": ["Bonus computed", "Income out of range"]
}
Let me know if you need anything else."#;

fn options() -> RenderOptions {
    let at = NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    RenderOptions::default().with_executed_at(at)
}

fn sheet() -> (TestMatrix, Sheet) {
    let spec = specification_from_generated(GENERATED).unwrap();
    let matrix = build_matrix(&spec, &mut seeded_rng()).unwrap();
    let sheet = SheetLayout::render(&matrix, &options());
    (matrix, sheet)
}

#[test]
fn test_generated_spec_builds() {
    let (matrix, _) = sheet();
    assert_eq!(matrix.test_case_count(), 3);
    let returns: Vec<&str> = matrix.return_conditions.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(returns, vec!["Valid salary", "Salary too low", "Salary too high"]);
    let logs: Vec<&str> = matrix.log_messages.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(logs, vec!["Bonus computed", "Income out of range"]);
    assert_matrix_invariants(&matrix);
}

#[test]
fn test_sheet_has_one_column_per_test_case() {
    let (_, sheet) = sheet();
    let header = sheet.find_row(1, "Condition").unwrap();
    let columns: Vec<&str> = (3..=5).map(|c| sheet.cell(header, c)).collect();
    assert_eq!(columns, vec!["UTCID01", "UTCID02", "UTCID03"]);
    assert_eq!(sheet.cell(header, 6), "");
}

#[test]
fn test_every_value_row_has_one_marker() {
    let (matrix, sheet) = sheet();
    for fv in &matrix.field_values {
        let label = sheet.find_row(2, &format!("Input `{}`:", fv.field.name)).unwrap();
        for (offset, assignment) in fv.values.iter().enumerate() {
            let row = label + 1 + offset;
            assert_eq!(sheet.cell(row, 2), assignment.value.to_string());
            let markers = (3..=5).filter(|&c| sheet.cell(row, c) == "●").count();
            assert_eq!(markers, 1);
        }
    }
}

#[test]
fn test_log_rows_follow_round_robin() {
    let (_, sheet) = sheet();
    let first = sheet.find_row(2, "Bonus computed").unwrap();
    let marks = |row: usize| -> Vec<&str> { (3..=5).map(|c| sheet.cell(row, c)).collect() };
    assert_eq!(marks(first), vec!["●", "", "●"]);
    assert_eq!(marks(first + 1), vec!["", "●", ""]);
}

#[test]
fn test_result_rows() {
    let (_, sheet) = sheet();
    let result = sheet.find_row(1, "Result").unwrap();
    let types: Vec<&str> = (3..=5).map(|c| sheet.cell(result, c)).collect();
    assert_eq!(types, vec!["B", "B", "N"]);
    assert_eq!(sheet.cell(result + 2, 5), "2025-12-31 23:59:59");
    assert_eq!(sheet.cell(result + 3, 5), "-");
}

#[test]
fn test_envelope_to_csv() {
    let body = serde_json::json!({
        "candidates": [{"content": {"parts": [{"text": GENERATED}]}}]
    })
    .to_string();
    let envelope = GenerationEnvelope::from_json(&body).unwrap();
    let spec = specification_from_generated(envelope.generated_text().unwrap()).unwrap();
    let matrix = build_matrix(&spec, &mut seeded_rng()).unwrap();

    let csv = render(&matrix, ReportFormat::Csv, &options()).unwrap();
    let first_line = csv.lines().next().unwrap();
    assert!(first_line.starts_with("Function Code,PAY_02,Function Name,computeBonus"));
    assert!(csv.contains("Input `income`:"));
    assert!(csv.contains("Passed/Failed,Passed,Passed,Passed"));
}
