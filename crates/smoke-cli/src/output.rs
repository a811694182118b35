//! Console rendering for call outcomes.

use anyhow::Result;
use console::{Term, style};

use smoke_core::outcome::tail;
use smoke_core::{LogsOutcome, ReportFormat, ReportOutcome, SmokeConfig};

use crate::summary::RunSummary;

/// Render the outcome of one report request
pub fn render_report(term: &Term, format: ReportFormat, outcome: &ReportOutcome) -> Result<()> {
    match outcome {
        ReportOutcome::Generated {
            message,
            file_name,
            preview_url,
        } => {
            term.write_line(&format!(
                "{}",
                style(format!("✓ {format} report generated")).green()
            ))?;
            // Generated only classifies at 200, so the echoed status is fixed.
            term.write_line(&format!("{}", style("  HTTP 200").dim()))?;
            if let Some(message) = message {
                term.write_line(&format!("{}", style(format!("  {message}")).dim()))?;
            }
            if let Some(file_name) = file_name {
                term.write_line(&format!("  File: {file_name}"))?;
            }
            if let Some(preview_url) = preview_url {
                term.write_line(&format!("  Preview: {preview_url}"))?;
            }
        }
        ReportOutcome::Rejected { message } => {
            let message = message.as_deref().unwrap_or("unknown error");
            term.write_line(&format!(
                "{}",
                style(format!("❌ {format} report failed: {message}")).red()
            ))?;
        }
        ReportOutcome::HttpFailure { status, body } => {
            term.write_line(&format!(
                "{}",
                style(format!("❌ {format} report failed: HTTP {status}")).red()
            ))?;
            write_body(term, body)?;
        }
        ReportOutcome::MalformedBody { error, body } => {
            term.write_line(&format!(
                "{}",
                style(format!(
                    "❌ {format} report failed: unparseable response: {error}"
                ))
                .red()
            ))?;
            write_body(term, body)?;
        }
        ReportOutcome::Unreachable { error } => {
            term.write_line(&format!(
                "{}",
                style(format!("❌ {format} report failed: {error}")).red()
            ))?;
        }
    }
    Ok(())
}

/// Render the outcome of the log fetch
pub fn render_logs(term: &Term, outcome: &LogsOutcome, limit: usize) -> Result<()> {
    match outcome {
        LogsOutcome::Fetched { entries } => {
            term.write_line(&format!(
                "{}",
                style(format!(
                    "✓ fetched {count} log entries",
                    count = entries.len()
                ))
                .green()
            ))?;
            term.write_line(&format!("{}", style("  HTTP 200").dim()))?;
            if entries.is_empty() {
                term.write_line(&format!("{}", style("  (no entries recorded)").dim()))?;
            } else {
                let shown = tail(entries, limit);
                term.write_line(&format!("  Last {count} entries:", count = shown.len()))?;
                for (position, entry) in shown.iter().enumerate() {
                    term.write_line(&format!("  {number}. {entry}", number = position + 1))?;
                }
            }
        }
        LogsOutcome::NoLogData { body } => {
            term.write_line(&format!(
                "{}",
                style("✓ log endpoint answered, but returned no log data").yellow()
            ))?;
            write_body(term, body)?;
        }
        LogsOutcome::HttpFailure { status, body } => {
            term.write_line(&format!(
                "{}",
                style(format!("❌ log fetch failed: HTTP {status}")).red()
            ))?;
            write_body(term, body)?;
        }
        LogsOutcome::MalformedBody { error, body } => {
            term.write_line(&format!(
                "{}",
                style(format!("❌ log fetch failed: unparseable response: {error}")).red()
            ))?;
            write_body(term, body)?;
        }
        LogsOutcome::Unreachable { error } => {
            term.write_line(&format!(
                "{}",
                style(format!("❌ log fetch failed: {error}")).red()
            ))?;
        }
    }
    Ok(())
}

/// Render the final verdict line
pub fn render_summary(term: &Term, summary: &RunSummary) -> Result<()> {
    term.write_line("")?;
    if summary.all_passed() {
        term.write_line(&format!(
            "{}",
            style(format!("✓ All {total} checks passed", total = summary.total()))
                .green()
                .bold()
        ))?;
    } else {
        term.write_line(&format!(
            "{}",
            style(format!(
                "❌ {failed} of {total} checks failed",
                failed = summary.failed,
                total = summary.total()
            ))
            .red()
            .bold()
        ))?;
    }
    Ok(())
}

/// Render the effective configuration as TOML
pub fn render_config(term: &Term, config: &SmokeConfig) -> Result<()> {
    term.write_line(toml::to_string_pretty(config)?.trim_end())?;
    Ok(())
}

fn write_body(term: &Term, body: &str) -> Result<()> {
    if !body.is_empty() {
        term.write_line(&format!("{}", style(format!("  {body}")).dim()))?;
    }
    Ok(())
}
