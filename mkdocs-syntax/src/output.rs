//! Output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`. Exit status is
//! the caller's concern; `CheckReport::ok` says whether anything is left.

use std::io::Write;

use crate::report::CheckReport;

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable plain text to a writer.
///
/// Uses the check-mode or fix-mode layout depending on `report.fix`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.files_found() == 0 {
        writeln!(writer, "No markdown files found.")?;
        return Ok(());
    }

    if report.fix {
        write_fix_summary(report, writer)
    } else {
        write_check_summary(report, writer)
    }
}

fn write_check_summary(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.issues.is_empty() {
        writeln!(writer, "No issues found.")?;
        return Ok(());
    }

    for issue in &report.issues {
        writeln!(writer, "{}", issue.format_human_readable())?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "{} issue(s) found ({} auto-fixable, {} manual).",
        report.issues.len(),
        report.fixable_count(),
        report.manual_count()
    )?;
    Ok(())
}

fn write_fix_summary(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.fixes_applied > 0 {
        writeln!(writer, "Fixed {} issue(s).", report.fixes_applied)?;
    }

    let remaining = report.manual_count();
    if remaining > 0 {
        writeln!(writer, "{remaining} issue(s) require manual attention:")?;
        for issue in report.manual_issues() {
            writeln!(writer, "  {}", issue.format_human_readable())?;
        }
    } else if report.fixes_applied == 0 {
        writeln!(writer, "No issues found.")?;
    }
    Ok(())
}
