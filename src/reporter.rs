//! Formatting and reporting for suite results

use colored::Colorize;
use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::runner::SuiteReport;

/// Formats a suite report as a pretty table for terminal output
pub fn format_report(report: &SuiteReport) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Check", "Status", "Message"]);

    for result in &report.results {
        builder.push_record([
            result.description.as_str(),
            &result.severity.as_colored_str(),
            &result.message,
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    let mut output = String::new();
    output.push_str(&table.to_string());
    output.push('\n');
    output.push_str(&format_summary(report));

    output
}

/// Formats a suite report as plain text, suitable for an HTTP response body
pub fn format_plain(title: &str, report: &SuiteReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{title}\n\n"));
    for result in &report.results {
        output.push_str(&format!(
            "{}  {}: {}\n",
            result.severity.as_str(),
            result.description,
            result.message
        ));
    }
    output.push_str(&format!("\nOverall: {}\n", report.overall.as_str()));

    output
}

/// Formats the summary section of the report
fn format_summary(report: &SuiteReport) -> String {
    let mut summary = String::new();

    summary.push_str(&format!("\n{}\n", "Summary".bold().underline()));
    summary.push_str(&format!("  Total checks: {}\n", report.total));
    summary.push_str(&format!("  {} Passed: {}\n", "✓".green(), report.passed));

    if report.warned > 0 {
        summary.push_str(&format!("  {} Warned: {}\n", "⚠".yellow(), report.warned));
    }

    if report.failed > 0 {
        summary.push_str(&format!("  {} Failed: {}\n", "✗".red(), report.failed));
    }

    summary.push('\n');
    if report.is_healthy() {
        if report.has_warnings() {
            summary.push_str(&format!(
                "  {}\n",
                "Overall: HEALTHY (with warnings)".yellow().bold()
            ));
        } else {
            summary.push_str(&format!("  {}\n", "Overall: HEALTHY".green().bold()));
        }
    } else {
        summary.push_str(&format!("  {}\n", "Overall: UNHEALTHY".red().bold()));
    }

    summary
}

/// Prints a suite report to stdout
pub fn print_report(report: &SuiteReport) {
    println!("{}", format_report(report));
}
