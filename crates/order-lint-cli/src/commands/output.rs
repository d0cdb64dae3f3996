//! Rendering lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use order_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use std::path::Path;

use crate::OutputFormat;

/// Prints lint results in the specified format. `root` resolves the
/// relative paths stored in violations.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warning => "\x1b[33mwarning\x1b[0m",
        Severity::Info => "\x1b[34minfo\x1b[0m",
    }
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        println!(
            "{}:{}:{} {} {} [{}]",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
            severity_label(violation.severity),
            violation.message,
            violation.rule,
        );
        if let Some(suggestion) = &violation.suggestion {
            let fixable = if violation.is_fixable() {
                " (fixable with --fix)"
            } else {
                ""
            };
            println!("  = help: {}{fixable}", suggestion.message);
        }
    }
    if !result.violations.is_empty() {
        println!();
    }
    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let counts = result.severity_counts();
    let color = if counts.errors > 0 {
        "\x1b[31m"
    } else if counts.warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{color}Found {counts} in {} file(s)\x1b[0m",
        result.files_checked
    );
    if result.fixes_applied > 0 {
        println!("Applied {} fix(es)", result.fixes_applied);
    }
    let fixable = result.fixable_count();
    if fixable > 0 {
        println!("{fixable} violation(s) can be fixed with --fix");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_pretty(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        eprintln!("{:?}", diagnostic_report(violation, root));
    }
    print_summary(result);
}

/// A miette report with the offending file attached when it can be read.
fn diagnostic_report(violation: &Violation, root: &Path) -> Report {
    let report = Report::new(ViolationDiagnostic::from(violation));
    let path = root.join(&violation.location.file);
    match std::fs::read_to_string(&path) {
        Ok(content) => report.with_source_code(NamedSource::new(
            violation.location.file.display().to_string(),
            content,
        )),
        Err(e) => {
            tracing::debug!("No source for {}: {}", path.display(), e);
            report
        }
    }
}
