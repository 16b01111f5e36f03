use paxname_core::VerificationReport;
use paxname_model::{AirlinePolicy, NameOutput};
use paxname_refcheck::UrlCheck;

#[derive(Debug)]
pub struct NormalizeResult {
    pub airline: String,
    pub policy: &'static AirlinePolicy,
    pub output: NameOutput,
}

#[derive(Debug)]
pub struct VerifyResult {
    pub report: VerificationReport,
    /// Present when `--check-urls` was requested.
    pub url_checks: Option<Vec<UrlCheck>>,
}

impl VerifyResult {
    /// Only logic failures count; URL failures are advisory.
    pub fn has_errors(&self) -> bool {
        !self.report.is_success()
    }
}
