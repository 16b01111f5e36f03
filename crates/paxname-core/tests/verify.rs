//! Tests for the verification harness and case files.

use std::io::Write;

use paxname_core::{CaseOutcome, CoreError, NameCase, builtin_cases, load_cases, run_cases};
use paxname_model::{NameField, NameInput, NameOutput};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_load_cases_from_json() {
    let file = write_temp(
        r#"[
            {
                "airline": "ana",
                "description": "three part given name",
                "input": { "given": "Taro Jiro", "surname": "Suzuki" },
                "expected": { "first": "TARO", "middle": "JIRO", "last": "SUZUKI" }
            },
            {
                "airline": "firefly",
                "input": { "given": "Ahmad" },
                "expected": { "first": "AHMAD", "last": "AHMAD" }
            }
        ]"#,
    );

    let cases = load_cases(file.path()).expect("load cases");
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1].description, "");
    assert_eq!(cases[1].input, NameInput::single("Ahmad"));

    let report = run_cases(&cases);
    assert_eq!(report.total(), 2);
    assert!(report.is_success());
}

#[test]
fn test_load_cases_missing_file() {
    let err = load_cases(std::path::Path::new("/nonexistent/cases.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io { .. }));
}

#[test]
fn test_load_cases_invalid_json() {
    let file = write_temp(r#"{"airline": "mas"}"#);
    let err = load_cases(file.path()).unwrap_err();
    assert!(matches!(err, CoreError::Parse { .. }));
    assert!(err.to_string().starts_with("invalid case file"));
}

#[test]
fn test_mismatch_reports_fields() {
    let case = NameCase {
        airline: "mas".to_string(),
        description: "wrong expectation".to_string(),
        input: NameInput::new("AHMAD FALIQ", "BIN", "HAMEDI"),
        expected: NameOutput::new("AHMAD", "FALIQ", "HAMEDI"),
    };
    let report = run_cases(&[case]);
    assert_eq!(report.passed(), 0);
    assert_eq!(report.failed(), 1);

    let CaseOutcome::Mismatch(mismatches) = &report.results[0].outcome else {
        panic!("expected mismatch, got {:?}", report.results[0].outcome);
    };
    let fields: Vec<NameField> = mismatches.iter().map(|m| m.field).collect();
    assert_eq!(
        fields,
        vec![NameField::First, NameField::Middle, NameField::Last]
    );
    assert_eq!(mismatches[2].actual, "BIN HAMEDI");
}

#[test]
fn test_builtin_cases_round_trip_json() {
    let cases = builtin_cases();
    let json = serde_json::to_string(&cases).expect("serialize");
    let parsed: Vec<NameCase> = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, cases);
}
