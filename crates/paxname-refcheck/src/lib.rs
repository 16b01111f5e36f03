//! Liveness checks for the airline reference document.
//!
//! The reference document links each airline's published name-entry rules and
//! quotes the passages the policy table was built from. This crate extracts
//! those URLs and quotes, fetches each page, and reports pages that are gone or
//! no longer contain the quoted text.

pub mod check;
pub mod error;
pub mod fetch;
pub mod html;
pub mod reference;

pub use check::{UrlCheck, UrlStatus, check_reference, check_references};
pub use error::{RefCheckError, Result};
pub use fetch::{CheckConfig, DEFAULT_TIMEOUT, FetchResult, Fetcher, HttpFetcher};
pub use html::{contains_snippet, strip_html};
pub use reference::{ReferenceEntry, extract_references, extract_urls, load_reference};
