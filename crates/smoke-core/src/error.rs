use core::result::Result as CoreResult;
use std::io::Error as IoError;

use reqwest::Error as ReqwestError;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for smoke-test operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur while setting up a smoke run.
///
/// Call outcomes are never errors. A refused connection or a bad status
/// code from the target is part of what a smoke run reports, so those are
/// captured in the outcome types instead.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Request(#[from] ReqwestError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}
