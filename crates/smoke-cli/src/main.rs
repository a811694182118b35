//! Smoke-test runner for the report service.
#![cfg_attr(
    test,
    allow(
        dead_code,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::missing_errors_doc,
        clippy::print_stdout,
        clippy::print_stderr,
        reason = "Allow for tests"
    )
)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use console::Term;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use smoke_core::ReportClient;

use cli::{Cli, Commands};

mod cli;
mod handlers;
mod output;
mod summary;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smoke=info,smoke_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let summary = match cli.command.unwrap_or(Commands::All) {
        Commands::Report { format } => {
            let client = ReportClient::new(&config)?;
            handlers::run_reports(&client, &config, &format.formats()).await?
        }
        Commands::Logs { tail } => {
            let client = ReportClient::new(&config)?;
            handlers::run_logs(&client, tail).await?
        }
        Commands::All => {
            let client = ReportClient::new(&config)?;
            handlers::run_all(&client, &config).await?
        }
        Commands::Config => {
            handlers::show_config(&config)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    output::render_summary(&Term::stdout(), &summary)?;

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
