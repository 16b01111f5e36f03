//! Property tests for the sanitizer and the field engine.

use paxname_core::{compute_fields, prepare, sanitize};
use paxname_model::{AirlinePolicy, airlines};
use proptest::prelude::*;

fn arb_policy() -> impl Strategy<Value = AirlinePolicy> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(drop_marker, duplicate_single, three_fields, no_spaces)| AirlinePolicy {
            label: "Generated",
            drop_marker,
            duplicate_single,
            three_fields,
            no_spaces,
        },
    )
}

fn arb_table_policy() -> impl Strategy<Value = AirlinePolicy> {
    let policies: Vec<AirlinePolicy> = airlines().map(|(_, policy)| *policy).collect();
    prop::sample::select(policies)
}

/// Already-sanitized name parts: uppercase words separated by single spaces.
fn arb_part() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z]{1,8}", 0..4).prop_map(|words| words.join(" "))
}

fn arb_nonempty_part() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z]{1,8}", 1..4).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn sanitize_is_idempotent(raw in ".*") {
        let once = sanitize(&raw);
        prop_assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn sanitize_output_is_canonical(raw in "[ -~\\t\\n@é]{0,40}") {
        let out = sanitize(&raw);
        prop_assert!(out.chars().all(|c| c.is_ascii_uppercase() || c == ' '));
        prop_assert!(!out.starts_with(' '));
        prop_assert!(!out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn prepare_is_stable(raw in ".*") {
        let once = prepare(&raw);
        prop_assert_eq!(prepare(&once), once);
    }

    #[test]
    fn duplicate_single_yields_equal_first_and_last(
        given in arb_part(),
        policy in arb_policy(),
    ) {
        let policy = AirlinePolicy { duplicate_single: true, ..policy };
        let out = compute_fields(&given, "", "", &policy);
        prop_assert_eq!(&out.first, &out.last);
    }

    #[test]
    fn no_spaces_leaves_no_spaces(
        given in arb_part(),
        patronymic in arb_part(),
        surname in arb_part(),
        policy in arb_policy(),
    ) {
        let policy = AirlinePolicy { no_spaces: true, ..policy };
        let out = compute_fields(&given, &patronymic, &surname, &policy);
        prop_assert!(!out.first.contains(' '));
        prop_assert!(!out.middle.contains(' '));
        prop_assert!(!out.last.contains(' '));
    }

    #[test]
    fn three_fields_middle_is_remaining_tokens(
        given in arb_part(),
        surname in arb_nonempty_part(),
        drop_marker in any::<bool>(),
    ) {
        let policy = AirlinePolicy {
            drop_marker,
            ..AirlinePolicy::new("Generated").three_fields()
        };
        let out = compute_fields(&given, "", &surname, &policy);
        let tokens: Vec<&str> = given.split_whitespace().collect();
        let expected_middle = tokens.iter().skip(1).copied().collect::<Vec<_>>().join(" ");
        prop_assert_eq!(out.first.as_str(), tokens.first().copied().unwrap_or(""));
        prop_assert_eq!(out.middle, expected_middle);
        if tokens.len() <= 1 {
            prop_assert!(out.first == given);
        }
    }

    #[test]
    fn drop_marker_never_includes_patronymic(
        given in arb_part(),
        marker in prop::sample::select(vec!["BIN", "BINTI", "BTE", "AP"]),
        surname in arb_part(),
        policy in arb_policy(),
    ) {
        let policy = AirlinePolicy { drop_marker: true, ..policy };
        let out = compute_fields(&given, marker, &surname, &policy);
        prop_assume!(!surname.contains(marker));
        // A single-name duplicate never arises: the marker makes the name non-single.
        prop_assert!(!out.last.contains(marker));
    }

    #[test]
    fn fields_never_contain_double_spaces(
        given in arb_part(),
        patronymic in arb_part(),
        surname in arb_part(),
        policy in arb_table_policy(),
    ) {
        let out = compute_fields(&given, &patronymic, &surname, &policy);
        for field in [&out.first, &out.middle, &out.last] {
            prop_assert!(!field.contains("  "));
            prop_assert_eq!(field.trim(), field.as_str());
        }
    }
}
