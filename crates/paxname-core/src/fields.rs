//! Field computation for a single airline policy.

use paxname_model::{AirlinePolicy, NameOutput};

/// Lay out sanitized name parts per `policy`.
///
/// Rules are applied in a fixed order whatever the flag combination:
///
/// 1. A traveler with no surname and no patronymic is a single name.
/// 2. The combined surname is `patronymic surname`, or whichever is present.
/// 3. `drop_marker` uses the raw surname instead of the combined one.
/// 4. The given name splits into its first token and the remaining tokens.
/// 5. First matching assignment wins:
///    - single name with `duplicate_single`: first = last = given
///    - `three_fields`: first token / remaining tokens / effective surname
///    - otherwise: given / empty / effective surname
/// 6. `no_spaces` strips whitespace from all three fields.
///
/// Inputs must already be sanitized. Never fails; missing parts produce empty
/// fields.
pub fn compute_fields(
    given: &str,
    patronymic: &str,
    surname: &str,
    policy: &AirlinePolicy,
) -> NameOutput {
    let is_single_name = surname.is_empty() && patronymic.is_empty();
    let effective_surname = if policy.drop_marker {
        surname.to_string()
    } else {
        combine_surname(patronymic, surname)
    };

    let mut tokens = given.split_whitespace();
    let first_token = tokens.next().unwrap_or_default();
    let remainder = tokens.collect::<Vec<_>>().join(" ");

    let duplicated = is_single_name && policy.duplicate_single;
    let mut output = if duplicated {
        NameOutput::new(given, "", given)
    } else if policy.three_fields {
        NameOutput::new(first_token, remainder, effective_surname)
    } else {
        NameOutput::new(given, "", effective_surname)
    };

    if policy.no_spaces {
        output.first = strip_spaces(&output.first);
        output.middle = strip_spaces(&output.middle);
        output.last = if duplicated {
            output.first.clone()
        } else {
            strip_spaces(&output.last)
        };
    }
    output
}

fn combine_surname(patronymic: &str, surname: &str) -> String {
    match (patronymic.is_empty(), surname.is_empty()) {
        (false, false) => format!("{patronymic} {surname}"),
        (false, true) => patronymic.to_string(),
        (true, _) => surname.to_string(),
    }
}

fn strip_spaces(value: &str) -> String {
    value.chars().filter(|ch| !ch.is_whitespace()).collect()
}
