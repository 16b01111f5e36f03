//! Traveler name inputs and the three booking fields they are reformatted into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw name components as entered by a traveler.
///
/// Every part may be empty. Values are not sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInput {
    #[serde(default)]
    pub given: String,
    /// Linking marker such as `BIN` or `BINTI`.
    #[serde(default)]
    pub patronymic: String,
    #[serde(default)]
    pub surname: String,
}

impl NameInput {
    pub fn new(
        given: impl Into<String>,
        patronymic: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            given: given.into(),
            patronymic: patronymic.into(),
            surname: surname.into(),
        }
    }

    /// A traveler with only a given name.
    pub fn single(given: impl Into<String>) -> Self {
        Self {
            given: given.into(),
            ..Self::default()
        }
    }
}

/// First/middle/last fields in the layout an airline expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOutput {
    pub first: String,
    #[serde(default)]
    pub middle: String,
    pub last: String,
}

impl NameOutput {
    pub fn new(
        first: impl Into<String>,
        middle: impl Into<String>,
        last: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            middle: middle.into(),
            last: last.into(),
        }
    }

    pub fn get(&self, field: NameField) -> &str {
        match field {
            NameField::First => &self.first,
            NameField::Middle => &self.middle,
            NameField::Last => &self.last,
        }
    }
}

/// One of the three output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    First,
    Middle,
    Last,
}

impl NameField {
    pub const ALL: [NameField; 3] = [NameField::First, NameField::Middle, NameField::Last];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Middle => "middle",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
