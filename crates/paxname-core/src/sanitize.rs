//! Canonicalization of raw name parts.
//!
//! Travelers commonly type `@` or `-` where a booking form will not accept a
//! space (`SITI@NADIA`, `TAI-MAN`). Those become spaces; everything else that
//! is not an uppercase Latin letter is dropped.

/// Sanitize an already-uppercased name part.
///
/// Steps, in order:
/// 1. `@` and `-` become a space
/// 2. characters other than `A`-`Z` and whitespace are removed
/// 3. whitespace runs collapse to a single space
/// 4. leading and trailing whitespace is trimmed
///
/// Lowercase letters are removed by step 2; use [`prepare`] for raw input.
///
/// # Example
/// ```
/// use paxname_core::sanitize;
///
/// assert_eq!(sanitize("  SITI@NADIA  "), "SITI NADIA");
/// assert_eq!(sanitize("O'NEIL-SMITH"), "ONEIL SMITH");
/// ```
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        let ch = if ch == '@' || ch == '-' { ' ' } else { ch };
        if ch.is_ascii_uppercase() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            pending_space = true;
        }
    }
    out
}

/// Uppercase then [`sanitize`] a raw name part.
pub fn prepare(raw: &str) -> String {
    sanitize(&raw.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_separators_with_spaces() {
        assert_eq!(sanitize("SITI@NADIA"), "SITI NADIA");
        assert_eq!(sanitize("TAI-MAN"), "TAI MAN");
        assert_eq!(sanitize("A@-B"), "A B");
    }

    #[test]
    fn removes_non_letters() {
        assert_eq!(sanitize("O'NEIL"), "ONEIL");
        assert_eq!(sanitize("JOHN2 DOE."), "JOHN DOE");
        assert_eq!(sanitize("ÉLISE"), "LISE");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(sanitize("  AHMAD \t\n FALIQ  "), "AHMAD FALIQ");
        assert_eq!(sanitize("A . B"), "A B");
    }

    #[test]
    fn dropped_characters_do_not_leave_gaps() {
        assert_eq!(sanitize(". . ."), "");
        assert_eq!(sanitize("-ALI-"), "ALI");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(prepare("   "), "");
    }

    #[test]
    fn lowercase_is_removed_unless_prepared() {
        assert_eq!(sanitize("john"), "");
        assert_eq!(prepare("john-paul"), "JOHN PAUL");
    }
}
