//! Verification of the engine against known airline cases.
//!
//! Each [`NameCase`] pairs raw traveler input with the fields an airline's own
//! documentation says it expects. A case fails when any field differs or when
//! its airline key is unknown.

use std::fs;
use std::path::Path;

use paxname_model::{ModelError, NameField, NameInput, NameOutput};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CoreError, Result};
use crate::normalize::normalize_for;

/// Raw input for one airline and the fields it must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCase {
    pub airline: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub input: NameInput,
    pub expected: NameOutput,
}

/// One field whose computed value differs from the expected literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMismatch {
    pub field: NameField,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Mismatch(Vec<FieldMismatch>),
    UnknownAirline(String),
}

#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: NameCase,
    pub actual: Option<NameOutput>,
    pub outcome: CaseOutcome,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(self.outcome, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerificationReport {
    pub results: Vec<CaseResult>,
}

impl VerificationReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|result| result.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|result| !result.passed())
    }
}

/// Compare `actual` against `expected` field by field.
pub fn diff_fields(expected: &NameOutput, actual: &NameOutput) -> Vec<FieldMismatch> {
    NameField::ALL
        .iter()
        .filter(|field| expected.get(**field) != actual.get(**field))
        .map(|field| FieldMismatch {
            field: *field,
            expected: expected.get(*field).to_string(),
            actual: actual.get(*field).to_string(),
        })
        .collect()
}

pub fn run_case(case: &NameCase) -> CaseResult {
    match normalize_for(&case.airline, &case.input) {
        Ok(actual) => {
            let mismatches = diff_fields(&case.expected, &actual);
            let outcome = if mismatches.is_empty() {
                CaseOutcome::Passed
            } else {
                CaseOutcome::Mismatch(mismatches)
            };
            CaseResult {
                case: case.clone(),
                actual: Some(actual),
                outcome,
            }
        }
        Err(ModelError::UnknownAirline(key)) => CaseResult {
            case: case.clone(),
            actual: None,
            outcome: CaseOutcome::UnknownAirline(key),
        },
    }
}

pub fn run_cases(cases: &[NameCase]) -> VerificationReport {
    let results: Vec<CaseResult> = cases
        .iter()
        .map(|case| {
            let result = run_case(case);
            match &result.outcome {
                CaseOutcome::Passed => {
                    debug!(airline = %case.airline, case = %case.description, "case passed");
                }
                CaseOutcome::Mismatch(mismatches) => {
                    warn!(
                        airline = %case.airline,
                        case = %case.description,
                        fields = mismatches.len(),
                        "case mismatch"
                    );
                }
                CaseOutcome::UnknownAirline(key) => {
                    warn!(airline = %key, case = %case.description, "unknown airline in case");
                }
            }
            result
        })
        .collect();
    let report = VerificationReport { results };
    info!(
        total = report.total(),
        passed = report.passed(),
        failed = report.failed(),
        "verification complete"
    );
    report
}

/// Load additional cases from a JSON array.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a JSON array of
/// cases.
pub fn load_cases(path: &Path) -> Result<Vec<NameCase>> {
    let text = fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

type RawCase = (&'static str, &'static str, [&'static str; 3], [&'static str; 3]);

/// `(airline, description, [given, patronymic, surname], [first, middle, last])`
const BUILTIN_CASES: &[RawCase] = &[
    (
        "mas",
        "marker kept in last name",
        ["AHMAD FALIQ", "BIN", "HAMEDI"],
        ["AHMAD FALIQ", "", "BIN HAMEDI"],
    ),
    (
        "batikair",
        "single name duplicated",
        ["ISKANDAR", "", ""],
        ["ISKANDAR", "", "ISKANDAR"],
    ),
    (
        "ana",
        "given name split into first and middle",
        ["JOHN WILLIAM", "", "DOE"],
        ["JOHN", "WILLIAM", "DOE"],
    ),
    (
        "china_airlines",
        "spaces removed",
        ["MEE LING", "", "TAN"],
        ["MEELING", "", "TAN"],
    ),
    (
        "airasia",
        "at sign becomes a space",
        ["SITI@NADIA", "BINTI", "AHMAD"],
        ["SITI NADIA", "", "BINTI AHMAD"],
    ),
    (
        "hk_express",
        "hyphen becomes a space",
        ["TAI-MAN", "", "CHAN"],
        ["TAI MAN", "", "CHAN"],
    ),
    (
        "airasia_x",
        "lowercase input is uppercased",
        ["nur aisyah", "binti", "razak"],
        ["NUR AISYAH", "", "BINTI RAZAK"],
    ),
    (
        "cathay_pacific",
        "two-part given name kept whole",
        ["SIU MING", "", "WONG"],
        ["SIU MING", "", "WONG"],
    ),
    (
        "emirates",
        "single name duplicated",
        ["MOHAMMED", "", ""],
        ["MOHAMMED", "", "MOHAMMED"],
    ),
    (
        "etihad",
        "marker dropped from last name",
        ["KHALID", "BIN", "WALID"],
        ["KHALID", "", "WALID"],
    ),
    (
        "eva_air",
        "spaces removed",
        ["CHIA HAO", "", "LIN"],
        ["CHIAHAO", "", "LIN"],
    ),
    (
        "firefly",
        "single name duplicated",
        ["SUKARNO", "", ""],
        ["SUKARNO", "", "SUKARNO"],
    ),
    (
        "garuda",
        "single name duplicated",
        ["WIDODO", "", ""],
        ["WIDODO", "", "WIDODO"],
    ),
    (
        "jal",
        "single token leaves middle empty",
        ["HANAKO", "", "YAMADA"],
        ["HANAKO", "", "YAMADA"],
    ),
    (
        "jetstar",
        "punctuation removed",
        ["MARY-JANE", "", "O'BRIEN"],
        ["MARY JANE", "", "OBRIEN"],
    ),
    (
        "korean_air",
        "single name duplicated without spaces",
        ["MIN JUN", "", ""],
        ["MINJUN", "", "MINJUN"],
    ),
    (
        "korean_air",
        "spaces removed from both names",
        ["JI HO", "", "PARK SEO"],
        ["JIHO", "", "PARKSEO"],
    ),
    (
        "qatar",
        "single name duplicated",
        ["FATIMA", "", ""],
        ["FATIMA", "", "FATIMA"],
    ),
    (
        "saudia",
        "marker dropped from last name",
        ["ABDULLAH", "BIN", "SAUD"],
        ["ABDULLAH", "", "SAUD"],
    ),
    (
        "scoot",
        "two-part given name kept whole",
        ["WEI LIANG", "", "LIM"],
        ["WEI LIANG", "", "LIM"],
    ),
    (
        "thai",
        "single name leaves last empty",
        ["SOMCHAI", "", ""],
        ["SOMCHAI", "", ""],
    ),
    (
        "turkish",
        "single name duplicated",
        ["AYSE", "", ""],
        ["AYSE", "", "AYSE"],
    ),
    (
        "ana",
        "multiple middle tokens",
        ["MARIA LUISA ANA", "", "SANTOS"],
        ["MARIA", "LUISA ANA", "SANTOS"],
    ),
    (
        "mas",
        "marker without surname",
        ["ALI", "BIN", ""],
        ["ALI", "", "BIN"],
    ),
];

/// Cases drawn from each airline's published name-entry rules.
pub fn builtin_cases() -> Vec<NameCase> {
    BUILTIN_CASES
        .iter()
        .map(|(airline, description, input, expected)| NameCase {
            airline: (*airline).to_string(),
            description: (*description).to_string(),
            input: NameInput::new(input[0], input[1], input[2]),
            expected: NameOutput::new(expected[0], expected[1], expected[2]),
        })
        .collect()
}
