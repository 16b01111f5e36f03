use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, trace, warn};

use paxname_core::{NameCase, builtin_cases, load_cases, normalize, run_cases};
use paxname_model::{NameInput, airlines};
use paxname_refcheck::{CheckConfig, Fetcher, HttpFetcher, UrlCheck, check_references};

use crate::cli::{AirlinesArgs, NormalizeArgs, ReferenceArgs, VerifyArgs};
use crate::logging::redact_value;
use crate::summary::{apply_table_style, flag_cell, header_cell};
use crate::types::{NormalizeResult, VerifyResult};

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let input = NameInput::new(&args.given, &args.patronymic, &args.surname);
    trace!(
        given = redact_value(&input.given),
        patronymic = redact_value(&input.patronymic),
        surname = redact_value(&input.surname),
        "raw name"
    );
    let policy = paxname_model::policy(&args.airline)?;
    debug!(airline = %args.airline, flags = ?policy.flag_names(), "normalizing name");
    let output = normalize(&input, policy);
    Ok(NormalizeResult {
        airline: args.airline.trim().to_ascii_lowercase(),
        policy,
        output,
    })
}

pub fn run_airlines(args: &AirlinesArgs) -> Result<()> {
    if args.json {
        let table: Vec<_> = airlines()
            .map(|(key, policy)| serde_json::json!({ "key": key, "policy": policy }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&table).context("serialize policy table")?
        );
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Airline"),
        header_cell("Drop marker"),
        header_cell("Duplicate single"),
        header_cell("Three fields"),
        header_cell("No spaces"),
    ]);
    apply_table_style(&mut table);
    for (key, policy) in airlines() {
        table.add_row(vec![
            comfy_table::Cell::new(key),
            comfy_table::Cell::new(policy.label),
            flag_cell(policy.drop_marker),
            flag_cell(policy.duplicate_single),
            flag_cell(policy.three_fields),
            flag_cell(policy.no_spaces),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Collect the cases a verify run should execute.
pub fn collect_cases(args: &VerifyArgs) -> Result<Vec<NameCase>> {
    let mut cases = if args.no_builtin {
        Vec::new()
    } else {
        builtin_cases()
    };
    for path in &args.cases {
        let loaded = load_cases(path)?;
        info!(path = %path.display(), count = loaded.len(), "loaded case file");
        cases.extend(loaded);
    }
    Ok(cases)
}

pub fn run_verify(args: &VerifyArgs) -> Result<VerifyResult> {
    let span = info_span!("verify");
    let _guard = span.enter();
    let start = Instant::now();

    let cases = collect_cases(args)?;
    let report = run_cases(&cases);
    info!(
        passed = report.passed(),
        failed = report.failed(),
        duration_ms = start.elapsed().as_millis(),
        "logic cases complete"
    );

    let url_checks = if args.check_urls {
        match check_reference_document(&args.reference) {
            Ok(checks) => Some(checks),
            Err(error) => {
                // Reference problems never fail a verify run.
                warn!(error = %format!("{error:#}"), "reference check skipped");
                None
            }
        }
    } else {
        None
    };

    Ok(VerifyResult { report, url_checks })
}

pub fn run_check_urls(args: &ReferenceArgs) -> Result<Vec<UrlCheck>> {
    check_reference_document(args)
}

/// HTTP settings for a reference check.
pub fn check_config(args: &ReferenceArgs) -> CheckConfig {
    let config = CheckConfig::default().with_timeout(Duration::from_secs(args.timeout));
    match &args.user_agent {
        Some(user_agent) => config.with_user_agent(user_agent.as_str()),
        None => config,
    }
}

fn check_reference_document(args: &ReferenceArgs) -> Result<Vec<UrlCheck>> {
    let config = check_config(args);
    let fetcher = HttpFetcher::new(&config).context("create HTTP client")?;
    check_document_with(&args.reference, &fetcher)
}

/// Check every URL in the document at `path` using `fetcher`.
pub fn check_document_with(path: &Path, fetcher: &dyn Fetcher) -> Result<Vec<UrlCheck>> {
    let span = info_span!("check_urls", reference = %path.display());
    let _guard = span.enter();
    let entries = paxname_refcheck::load_reference(path)?;
    info!(url_count = entries.len(), "reference document loaded");
    Ok(check_references(&entries, fetcher))
}
