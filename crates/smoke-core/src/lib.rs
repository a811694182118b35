//! Smoke-test client for the report service.
//!
//! This crate issues the two calls a smoke run cares about, report
//! generation and log retrieval, and folds every possible result into
//! plain outcome values. Callers decide how to render and aggregate
//! them; nothing here prints or exits.
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
        reason = "Test allows"
    )
)]

/// HTTP client for the report service endpoints.
pub mod client;
/// Runner configuration and defaults.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Wire-format types for the report API.
pub mod models;
/// Classified call results and display helpers.
pub mod outcome;

pub use client::ReportClient;
pub use config::SmokeConfig;
pub use error::{Error, Result};
pub use models::{GenerateReply, GenerateRequest, ReportFormat};
pub use outcome::{LogsOutcome, ReportOutcome};
