//! URL and snippet extraction from the reference document.
//!
//! The reference document is Markdown. Every `http(s)` URL in it is checked.
//! A blockquote directly under a line that mentions a URL quotes text the
//! linked page is expected to contain:
//!
//! ```text
//! - Malaysia Airlines: https://www.malaysiaairlines.com/
//!   > Name as per passport
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{RefCheckError, Result};

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'`]+"#).expect("Invalid URL regex"));

const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '*', '_'];

/// A URL from the reference document and the snippets quoted under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    pub url: String,
    pub snippets: Vec<String>,
}

/// Read a reference document from disk.
///
/// # Errors
///
/// Returns [`RefCheckError::Io`] when the file cannot be read.
pub fn load_reference(path: &Path) -> Result<Vec<ReferenceEntry>> {
    let text = fs::read_to_string(path).map_err(|source| RefCheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_references(&text))
}

/// All URLs in `text`, deduplicated in first-seen order.
pub fn extract_urls(text: &str) -> Vec<String> {
    extract_references(text)
        .into_iter()
        .map(|entry| entry.url)
        .collect()
}

pub fn extract_references(text: &str) -> Vec<ReferenceEntry> {
    let mut entries: Vec<ReferenceEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    // Entry that quote lines currently attach to.
    let mut attach_to: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim_start();
        let urls = urls_in_line(line);

        if !urls.is_empty() {
            for url in urls {
                let position = *index.entry(url.clone()).or_insert_with(|| {
                    entries.push(ReferenceEntry {
                        url,
                        snippets: Vec::new(),
                    });
                    entries.len() - 1
                });
                attach_to = Some(position);
            }
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        match (trimmed.strip_prefix('>'), attach_to) {
            (Some(quoted), Some(position)) => {
                let snippet = unquote(quoted);
                if !snippet.is_empty() && !entries[position].snippets.contains(&snippet) {
                    entries[position].snippets.push(snippet);
                }
            }
            _ => attach_to = None,
        }
    }
    entries
}

fn urls_in_line(line: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(line)
        .map(|found| trim_url(found.as_str()).to_string())
        .filter(|url| url.len() > "https://".len())
        .collect()
}

fn trim_url(mut url: &str) -> &str {
    loop {
        if let Some(stripped) = url.strip_suffix(TRAILING_PUNCTUATION) {
            url = stripped;
        } else if url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
            url = &url[..url.len() - 1];
        } else if url.ends_with(']') && url.matches(']').count() > url.matches('[').count() {
            url = &url[..url.len() - 1];
        } else {
            return url;
        }
    }
}

fn unquote(quoted: &str) -> String {
    let text = quoted.trim();
    let text = text
        .strip_prefix(['"', '\u{201c}'])
        .and_then(|inner| inner.strip_suffix(['"', '\u{201d}']))
        .unwrap_or(text);
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_markdown_wrapping() {
        assert_eq!(trim_url("https://a.example/x)."), "https://a.example/x");
        assert_eq!(
            trim_url("https://en.example/wiki/Name_(given)"),
            "https://en.example/wiki/Name_(given)"
        );
        assert_eq!(trim_url("https://a.example/]**"), "https://a.example/");
    }

    #[test]
    fn unquote_strips_quotes() {
        assert_eq!(unquote(r#" "Name as  per passport" "#), "Name as per passport");
        assert_eq!(unquote(" \u{201c}Given name\u{201d}"), "Given name");
        assert_eq!(unquote(" plain text "), "plain text");
    }

    #[test]
    fn bare_scheme_is_ignored() {
        assert!(urls_in_line("see https://.").is_empty());
    }
}
