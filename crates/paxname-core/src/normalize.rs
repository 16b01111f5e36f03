use paxname_model::{AirlinePolicy, NameInput, NameOutput, Result};
use tracing::debug;

use crate::fields::compute_fields;
use crate::sanitize::prepare;

/// Uppercase, sanitize and lay out a raw name for `policy`.
pub fn normalize(input: &NameInput, policy: &AirlinePolicy) -> NameOutput {
    let given = prepare(&input.given);
    let patronymic = prepare(&input.patronymic);
    let surname = prepare(&input.surname);
    compute_fields(&given, &patronymic, &surname, policy)
}

/// Normalize a raw name for the airline identified by `airline`.
///
/// # Errors
///
/// Fails only when `airline` is not a known key.
pub fn normalize_for(airline: &str, input: &NameInput) -> Result<NameOutput> {
    let policy = paxname_model::policy(airline)?;
    debug!(airline = %airline, flags = ?policy.flag_names(), "normalizing name");
    Ok(normalize(input, policy))
}
