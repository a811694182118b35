//! Command handlers that drive the client and aggregate results.

use anyhow::Result;
use console::{Term, style};
use tracing::debug;

use smoke_core::{ReportClient, ReportFormat, SmokeConfig};

use crate::cli::DEFAULT_TAIL;
use crate::output;
use crate::summary::RunSummary;

/// Request each format in turn and tally the outcomes.
///
/// A configured pause is honored between consecutive requests, never
/// before the first or after the last.
pub async fn run_reports(
    client: &ReportClient,
    config: &SmokeConfig,
    formats: &[ReportFormat],
) -> Result<RunSummary> {
    let term = Term::stdout();
    let mut summary = RunSummary::new();

    term.write_line(&format!(
        "{}",
        style(format!(
            "Testing report generation at {base}",
            base = config.base_url
        ))
        .cyan()
        .bold()
    ))?;

    for (index, format) in formats.iter().enumerate() {
        if index > 0 && !config.pause().is_zero() {
            tokio::time::sleep(config.pause()).await;
        }

        let outcome = client.generate_report(*format).await;
        debug!("report {format}: passed={passed}", passed = outcome.passed());
        output::render_report(&term, *format, &outcome)?;
        summary.record(outcome.passed());
    }

    Ok(summary)
}

/// Fetch the service log and tally the outcome.
pub async fn run_logs(client: &ReportClient, tail_limit: usize) -> Result<RunSummary> {
    let term = Term::stdout();
    let mut summary = RunSummary::new();

    term.write_line(&format!("{}", style("Fetching service logs").cyan().bold()))?;

    let outcome = client.fetch_logs().await;
    debug!("logs: passed={passed}", passed = outcome.passed());
    output::render_logs(&term, &outcome, tail_limit)?;
    summary.record(outcome.passed());

    Ok(summary)
}

/// Run the full suite: every report format, then the log fetch.
pub async fn run_all(client: &ReportClient, config: &SmokeConfig) -> Result<RunSummary> {
    let term = Term::stdout();

    let mut summary = run_reports(client, config, &ReportFormat::all()).await?;
    term.write_line("")?;
    summary.merge(run_logs(client, DEFAULT_TAIL).await?);

    Ok(summary)
}

/// Print the effective configuration.
pub fn show_config(config: &SmokeConfig) -> Result<()> {
    output::render_config(&Term::stdout(), config)
}
