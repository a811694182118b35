use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Timeout applied to the log fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for a smoke run.
///
/// Every field has a default, so an empty TOML file is a valid config.
/// Unknown keys are rejected to catch typos in config files early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SmokeConfig {
    /// Root URL of the service under test, without a trailing path.
    pub base_url: String,
    /// Timeout for the log fetch, in seconds.
    pub timeout_secs: u64,
    /// Pause inserted between consecutive report requests, in seconds.
    pub pause_secs: u64,
}

impl SmokeConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads configuration from the given file, or falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a path is given but the file cannot be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn with_pause_secs(mut self, pause_secs: u64) -> Self {
        self.pause_secs = pause_secs;
        self
    }

    /// Timeout for the log fetch as a `Duration`.
    pub fn log_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause between report requests as a `Duration`.
    pub fn pause(&self) -> Duration {
        Duration::from_secs(self.pause_secs)
    }
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            pause_secs: 0,
        }
    }
}
