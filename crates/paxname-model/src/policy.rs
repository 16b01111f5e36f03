//! Per-airline name-field policies.
//!
//! Each airline's booking form differs in how it wants a traveler's name laid
//! out. The differences reduce to four independent flags, applied by the
//! engine in a fixed order regardless of which ones are set:
//!
//! - `drop_marker`: the patronymic marker is left out of the last-name field
//! - `duplicate_single`: single-name travelers repeat the given name as last name
//! - `three_fields`: the given name is split into first and middle fields
//! - `no_spaces`: whitespace is stripped from every field
//!
//! The table below is process-wide, read-only configuration. Lookups go through
//! an index built once on first use.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{ModelError, Result};

/// Field-layout flags for one airline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AirlinePolicy {
    /// Display name.
    pub label: &'static str,
    pub drop_marker: bool,
    pub duplicate_single: bool,
    pub three_fields: bool,
    pub no_spaces: bool,
}

impl AirlinePolicy {
    /// A policy with every flag off: first = given, last = marker + surname.
    #[must_use]
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            drop_marker: false,
            duplicate_single: false,
            three_fields: false,
            no_spaces: false,
        }
    }

    #[must_use]
    pub const fn drop_marker(mut self) -> Self {
        self.drop_marker = true;
        self
    }

    #[must_use]
    pub const fn duplicate_single(mut self) -> Self {
        self.duplicate_single = true;
        self
    }

    #[must_use]
    pub const fn three_fields(mut self) -> Self {
        self.three_fields = true;
        self
    }

    #[must_use]
    pub const fn no_spaces(mut self) -> Self {
        self.no_spaces = true;
        self
    }

    /// Names of the flags that are set, in application order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.drop_marker {
            flags.push("drop_marker");
        }
        if self.duplicate_single {
            flags.push("duplicate_single");
        }
        if self.three_fields {
            flags.push("three_fields");
        }
        if self.no_spaces {
            flags.push("no_spaces");
        }
        flags
    }
}

/// Known airlines, sorted by key.
static POLICY_TABLE: &[(&str, AirlinePolicy)] = &[
    ("airasia", AirlinePolicy::new("AirAsia")),
    ("airasia_x", AirlinePolicy::new("AirAsia X")),
    ("ana", AirlinePolicy::new("All Nippon Airways").three_fields()),
    (
        "batikair",
        AirlinePolicy::new("Batik Air Malaysia").duplicate_single(),
    ),
    ("cathay_pacific", AirlinePolicy::new("Cathay Pacific")),
    (
        "china_airlines",
        AirlinePolicy::new("China Airlines").no_spaces(),
    ),
    ("emirates", AirlinePolicy::new("Emirates").duplicate_single()),
    ("etihad", AirlinePolicy::new("Etihad Airways").drop_marker()),
    ("eva_air", AirlinePolicy::new("EVA Air").no_spaces()),
    ("firefly", AirlinePolicy::new("Firefly").duplicate_single()),
    (
        "garuda",
        AirlinePolicy::new("Garuda Indonesia").duplicate_single(),
    ),
    ("hk_express", AirlinePolicy::new("HK Express")),
    ("jal", AirlinePolicy::new("Japan Airlines").three_fields()),
    ("jetstar", AirlinePolicy::new("Jetstar")),
    (
        "korean_air",
        AirlinePolicy::new("Korean Air")
            .duplicate_single()
            .no_spaces(),
    ),
    ("mas", AirlinePolicy::new("Malaysia Airlines")),
    ("qatar", AirlinePolicy::new("Qatar Airways").duplicate_single()),
    ("saudia", AirlinePolicy::new("Saudia").drop_marker()),
    ("scoot", AirlinePolicy::new("Scoot")),
    ("thai", AirlinePolicy::new("Thai Airways")),
    (
        "turkish",
        AirlinePolicy::new("Turkish Airlines").duplicate_single(),
    ),
];

static POLICY_INDEX: LazyLock<BTreeMap<&'static str, &'static AirlinePolicy>> =
    LazyLock::new(|| {
        POLICY_TABLE
            .iter()
            .map(|(key, policy)| (*key, policy))
            .collect()
    });

/// Look up the policy for an airline key.
///
/// Keys are matched ASCII case-insensitively; surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`ModelError::UnknownAirline`] when the key is not in the table.
pub fn policy(key: &str) -> Result<&'static AirlinePolicy> {
    let normalized = key.trim().to_ascii_lowercase();
    POLICY_INDEX
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| ModelError::UnknownAirline(key.trim().to_string()))
}

/// All known airlines as `(key, policy)` pairs, ordered by key.
pub fn airlines() -> impl Iterator<Item = (&'static str, &'static AirlinePolicy)> {
    POLICY_INDEX.iter().map(|(key, policy)| (*key, *policy))
}

pub fn airline_keys() -> Vec<&'static str> {
    POLICY_INDEX.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_are_sorted_and_unique() {
        let keys: Vec<&str> = POLICY_TABLE.iter().map(|(key, _)| *key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(keys, sorted);
        assert_eq!(POLICY_INDEX.len(), POLICY_TABLE.len());
    }

    #[test]
    fn keys_are_short_lowercase_identifiers() {
        for (key, _) in POLICY_TABLE {
            assert!(
                key.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "bad key {key}"
            );
        }
    }

    #[test]
    fn builder_flags_combine() {
        let policy = AirlinePolicy::new("Test").drop_marker().three_fields();
        assert!(policy.drop_marker);
        assert!(policy.three_fields);
        assert!(!policy.duplicate_single);
        assert!(!policy.no_spaces);
        assert_eq!(policy.flag_names(), vec!["drop_marker", "three_fields"]);
    }
}
