use std::fmt;

use tracing::{info, warn};

use crate::fetch::Fetcher;
use crate::html::{contains_snippet, strip_html};
use crate::reference::ReferenceEntry;

/// Result of checking one reference URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// Reachable and every quoted snippet was found.
    Live,
    /// No response: DNS, connection or timeout failure.
    Unreachable(String),
    /// A response with a non-2xx status.
    HttpStatus(u16),
    /// Reachable, but these snippets no longer appear on the page.
    SnippetMissing(Vec<String>),
}

impl UrlStatus {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl fmt::Display for UrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("live"),
            Self::Unreachable(reason) => write!(f, "unreachable ({reason})"),
            Self::HttpStatus(code) => write!(f, "HTTP {code}"),
            Self::SnippetMissing(missing) => write!(f, "{} snippet(s) missing", missing.len()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlCheck {
    pub url: String,
    pub status: UrlStatus,
}

pub fn check_reference(entry: &ReferenceEntry, fetcher: &dyn Fetcher) -> UrlCheck {
    let result = fetcher.fetch(&entry.url);
    let status = if result.ok {
        let text = strip_html(&result.body);
        let missing: Vec<String> = entry
            .snippets
            .iter()
            .filter(|snippet| !contains_snippet(&text, snippet))
            .cloned()
            .collect();
        if missing.is_empty() {
            UrlStatus::Live
        } else {
            UrlStatus::SnippetMissing(missing)
        }
    } else if result.status == 0 {
        UrlStatus::Unreachable(result.error.unwrap_or_else(|| "no response".to_string()))
    } else if (200..300).contains(&result.status) {
        // 2xx whose body could not be read.
        UrlStatus::Unreachable(result.error.unwrap_or_else(|| "empty body".to_string()))
    } else {
        UrlStatus::HttpStatus(result.status)
    };

    if !status.is_live() {
        warn!(url = %entry.url, status = %status, "reference url check failed");
    }
    UrlCheck {
        url: entry.url.clone(),
        status,
    }
}

/// Check every entry in order, one request at a time.
pub fn check_references(entries: &[ReferenceEntry], fetcher: &dyn Fetcher) -> Vec<UrlCheck> {
    let checks: Vec<UrlCheck> = entries
        .iter()
        .map(|entry| check_reference(entry, fetcher))
        .collect();
    let live = checks.iter().filter(|check| check.status.is_live()).count();
    info!(
        total = checks.len(),
        live,
        failed = checks.len() - live,
        "reference check complete"
    );
    checks
}
