//! Plain-text extraction from fetched pages.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static SCRIPT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style|noscript)\b.*?</(script|style|noscript)\s*>")
        .expect("Invalid script regex")
});

static COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("Invalid comment regex"));

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("Invalid tag regex"));

static NUMERIC_ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&#(?:([0-9]{1,7})|[xX]([0-9a-fA-F]{1,6}));").expect("Invalid entity regex")
});

/// Named entities decoded by [`strip_html`]. `&amp;` is decoded last.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201c}"),
    ("&rdquo;", "\u{201d}"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
];

/// Reduce an HTML document to its visible text on a single line.
pub fn strip_html(html: &str) -> String {
    let text = SCRIPT_REGEX.replace_all(html, " ");
    let text = COMMENT_REGEX.replace_all(&text, " ");
    let text = TAG_REGEX.replace_all(&text, " ");
    let text = decode_entities(&text);
    collapse_whitespace(&text)
}

fn decode_entities(text: &str) -> String {
    let mut decoded = NUMERIC_ENTITY_REGEX
        .replace_all(text, |caps: &Captures<'_>| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(decimal), _) => decimal.as_str().parse::<u32>().ok(),
                (None, Some(hex)) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, None) => None,
            };
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .into_owned();
    for (entity, replacement) in NAMED_ENTITIES {
        if decoded.contains(entity) {
            decoded = decoded.replace(entity, replacement);
        }
    }
    decoded.replace("&amp;", "&")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Fold typographic quotes and case so copied prose matches page text.
fn fold(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|ch| match ch {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201c}' | '\u{201d}' => '"',
            other => other,
        })
        .collect();
    collapse_whitespace(&folded.to_lowercase())
}

/// Whether `snippet` appears in `text`, ignoring case, whitespace layout and
/// quote style.
pub fn contains_snippet(text: &str, snippet: &str) -> bool {
    let needle = fold(snippet);
    needle.is_empty() || fold(text).contains(&needle)
}
