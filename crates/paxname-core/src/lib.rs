//! Traveler name normalization for airline booking forms.
//!
//! Raw name parts are uppercased and sanitized, then laid out into the
//! first/middle/last fields an airline's [`AirlinePolicy`] describes.
//!
//! ```
//! use paxname_core::normalize_for;
//! use paxname_model::{NameInput, NameOutput};
//!
//! let input = NameInput::new("John William", "", "Doe");
//! let output = normalize_for("ana", &input).unwrap();
//! assert_eq!(output, NameOutput::new("JOHN", "WILLIAM", "DOE"));
//! ```
//!
//! [`AirlinePolicy`]: paxname_model::AirlinePolicy

pub mod error;
pub mod fields;
pub mod normalize;
pub mod sanitize;
pub mod verify;

pub use error::{CoreError, Result};
pub use fields::compute_fields;
pub use normalize::{normalize, normalize_for};
pub use sanitize::{prepare, sanitize};
pub use verify::{
    CaseOutcome, CaseResult, FieldMismatch, NameCase, VerificationReport, builtin_cases,
    diff_fields, load_cases, run_case, run_cases,
};
