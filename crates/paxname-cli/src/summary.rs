use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use paxname_core::{CaseOutcome, CaseResult, VerificationReport};
use paxname_model::NameField;
use paxname_refcheck::{UrlCheck, UrlStatus};

use crate::types::{NormalizeResult, VerifyResult};

pub fn print_normalized(result: &NormalizeResult) {
    println!("Airline: {} ({})", result.policy.label, result.airline);
    let flags = result.policy.flag_names();
    if !flags.is_empty() {
        println!("Rules: {}", flags.join(", "));
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    for field in NameField::ALL {
        let value = result.output.get(field);
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value).add_attribute(Attribute::Bold)
        };
        table.add_row(vec![Cell::new(field.as_str()), value_cell]);
    }
    println!("{table}");
}

pub fn print_verification(result: &VerifyResult) {
    print_case_table(&result.report);
    let failures: Vec<&CaseResult> = result.report.failures().collect();
    if !failures.is_empty() {
        eprintln!("Failures:");
        for failure in failures {
            for line in failure_lines(failure) {
                eprintln!("{line}");
            }
        }
    }
    println!(
        "Logic cases: {} passed, {} failed, {} total",
        result.report.passed(),
        result.report.failed(),
        result.report.total()
    );
    if let Some(checks) = &result.url_checks {
        print_url_checks(checks);
    }
}

fn print_case_table(report: &VerificationReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Airline"),
        header_cell("Case"),
        header_cell("First"),
        header_cell("Middle"),
        header_cell("Last"),
        header_cell("Result"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Center);
    for result in &report.results {
        let mut row = vec![
            Cell::new(&result.case.airline)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            description_cell(&result.case.description),
        ];
        for field in NameField::ALL {
            row.push(field_cell(result, field));
        }
        row.push(outcome_cell(&result.outcome));
        table.add_row(row);
    }
    println!("{table}");
}

/// Per-field expected/actual lines for one failing case.
pub fn failure_lines(result: &CaseResult) -> Vec<String> {
    let case = &result.case;
    let title = if case.description.is_empty() {
        format!("- {}", case.airline)
    } else {
        format!("- {}: {}", case.airline, case.description)
    };
    let mut lines = vec![title];
    match &result.outcome {
        CaseOutcome::Passed => {}
        CaseOutcome::Mismatch(mismatches) => {
            for mismatch in mismatches {
                lines.push(format!(
                    "    {:<6} expected {:?}, got {:?}",
                    mismatch.field.as_str(),
                    mismatch.expected,
                    mismatch.actual
                ));
            }
        }
        CaseOutcome::UnknownAirline(key) => {
            lines.push(format!("    unknown airline {key:?}"));
        }
    }
    lines
}

pub fn print_url_checks(checks: &[UrlCheck]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("URL"), header_cell("Status")]);
    apply_table_style(&mut table);
    for check in checks {
        table.add_row(vec![Cell::new(&check.url), url_status_cell(&check.status)]);
    }
    println!();
    println!("Reference URLs:");
    println!("{table}");

    let mut missing_any = false;
    for check in checks {
        if let UrlStatus::SnippetMissing(missing) = &check.status {
            if !missing_any {
                eprintln!("Missing snippets:");
                missing_any = true;
            }
            for snippet in missing {
                eprintln!("- {}: {snippet:?}", check.url);
            }
        }
    }
    let live = checks.iter().filter(|check| check.status.is_live()).count();
    println!(
        "Reference URLs: {live} live, {} warning(s) (advisory, exit code unaffected)",
        checks.len() - live
    );
}

fn field_cell(result: &CaseResult, field: NameField) -> Cell {
    let Some(actual) = result.actual.as_ref() else {
        return dim_cell("-");
    };
    let value = actual.get(field);
    let mismatched = matches!(
        &result.outcome,
        CaseOutcome::Mismatch(mismatches) if mismatches.iter().any(|m| m.field == field)
    );
    if mismatched {
        Cell::new(value).fg(Color::Red).add_attribute(Attribute::Bold)
    } else if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn outcome_cell(outcome: &CaseOutcome) -> Cell {
    match outcome {
        CaseOutcome::Passed => Cell::new("PASS")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        CaseOutcome::Mismatch(_) => Cell::new("FAIL")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        CaseOutcome::UnknownAirline(_) => Cell::new("UNKNOWN").fg(Color::Red),
    }
}

fn url_status_cell(status: &UrlStatus) -> Cell {
    match status {
        UrlStatus::Live => Cell::new("live").fg(Color::Green),
        other => Cell::new(other.to_string()).fg(Color::Yellow),
    }
}

pub fn flag_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    } else {
        dim_cell("-").set_alignment(CellAlignment::Center)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn description_cell(description: &str) -> Cell {
    if description.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(description)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
