use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use smoke_core::{ReportFormat, Result, SmokeConfig};

/// How many recent log entries a run displays by default.
pub const DEFAULT_TAIL: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "smoke")]
#[command(about = "Smoke tests for the report service", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        env = "SMOKE_BASE_URL",
        help = "Base URL of the service under test"
    )]
    pub base_url: Option<String>,

    #[arg(long, help = "Timeout for the log fetch, in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "Pause between report requests, in seconds")]
    pub pause: Option<u64>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Builds the effective config: flags beat environment, environment
    /// beats the config file, the file beats built-in defaults.
    ///
    /// Flag and environment precedence is clap's, since the environment
    /// only feeds the `base_url` argument.
    pub fn resolve_config(&self) -> Result<SmokeConfig> {
        let mut config = SmokeConfig::load_or_default(self.config.as_deref())?;
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }
        if let Some(pause) = self.pause {
            config = config.with_pause_secs(pause);
        }
        Ok(config)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Exercise report generation")]
    Report {
        #[arg(long, value_enum, default_value = "all", help = "Report format to request")]
        format: FormatArg,
    },

    #[command(about = "Fetch the service log")]
    Logs {
        #[arg(long, default_value_t = DEFAULT_TAIL, help = "How many recent entries to display")]
        tail: usize,
    },

    #[command(about = "Run the full smoke suite")]
    All,

    #[command(about = "Show the effective configuration")]
    Config,
}

/// Format selection on the command line, including the "run both" case
/// that never goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Request only the spreadsheet report.
    Excel,
    /// Request only the HTML report.
    Html,
    /// Request every format in turn.
    All,
}

impl FormatArg {
    /// Expands the selection into the formats to request.
    pub fn formats(self) -> Vec<ReportFormat> {
        match self {
            Self::Excel => vec![ReportFormat::Excel],
            Self::Html => vec![ReportFormat::Html],
            Self::All => ReportFormat::all().to_vec(),
        }
    }
}
