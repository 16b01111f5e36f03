//! HTTP fetching for reference URLs.
//!
//! Fetch failures never surface as errors: a timeout, DNS failure or non-2xx
//! response is recorded in the [`FetchResult`] and the check moves on.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::Result;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// User agent string for reference requests.
const USER_AGENT_VALUE: &str = concat!("paxname-refcheck/", env!("CARGO_PKG_VERSION"));

/// Outcome of fetching one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchResult {
    /// True for a 2xx response whose body was read.
    pub ok: bool,
    /// HTTP status, or 0 when no response was received.
    pub status: u16,
    pub body: String,
    pub error: Option<String>,
}

impl FetchResult {
    pub fn success(status: u16, body: impl Into<String>) -> Self {
        Self {
            ok: true,
            status,
            body: body.into(),
            error: None,
        }
    }

    pub fn failure(status: u16, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            body: String::new(),
            error: Some(error.into()),
        }
    }
}

/// Source of page bodies for the URL checker.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> FetchResult;
}

/// Settings for [`HttpFetcher`].
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }
}

impl CheckConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking HTTP fetcher with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &CheckConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FetchResult {
        debug!(url = %url, "fetching reference url");
        let response = match self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
        {
            Ok(response) => response,
            Err(error) => {
                let reason = if error.is_timeout() {
                    "timed out".to_string()
                } else {
                    error.to_string()
                };
                return FetchResult::failure(0, reason);
            }
        };

        let status = response.status();
        if !status.is_success() {
            return FetchResult::failure(status.as_u16(), format!("HTTP {status}"));
        }
        match response.text() {
            Ok(body) => FetchResult::success(status.as_u16(), body),
            Err(error) => FetchResult::failure(
                status.as_u16(),
                format!("failed to read body: {error}"),
            ),
        }
    }
}
