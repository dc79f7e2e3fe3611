//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional JSON config
//! file, then command-line flags (applied by the CLI through the `with_*`
//! builders).

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_INITIAL_DELAY_MS, DEFAULT_RETRIES,
};
use crate::error::{DirectoryError, Result};
use crate::fetcher::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Where the facility data comes from and how hard to try fetching it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Published CSV export URL
    pub source_url: Option<String>,

    /// CSV text used when no URL is configured
    pub fallback_text: Option<String>,

    /// Maximum fetch attempts
    pub retries: u32,

    /// Backoff base in milliseconds
    pub initial_delay_ms: u64,

    /// Per-request timeout in seconds (none by default)
    pub request_timeout_secs: Option<u64>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            source_url: None,
            fallback_text: None,
            retries: DEFAULT_RETRIES,
            initial_delay_ms: DEFAULT_INITIAL_DELAY_MS,
            request_timeout_secs: None,
        }
    }
}

impl DirectoryConfig {
    /// `<platform config dir>/afterschool-directory/config.json`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Read a JSON config file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DirectoryError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| DirectoryError::ConfigFile {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, else from the default location if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_config_path() {
                Some(default) if default.exists() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_fallback_text(mut self, text: impl Into<String>) -> Self {
        self.fallback_text = Some(text.into());
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_initial_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = Some(secs);
        self
    }

    /// Reject settings that can never produce a fetch
    pub fn validate(&self) -> Result<()> {
        if self.retries == 0 {
            return Err(DirectoryError::configuration(
                "retries must be at least 1",
            ));
        }

        if let Some(url) = &self.source_url {
            if url.trim().is_empty() {
                return Err(DirectoryError::configuration("source URL is blank"));
            }
        }

        if self.request_timeout_secs == Some(0) {
            return Err(DirectoryError::configuration(
                "request timeout must be positive",
            ));
        }

        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retries, Duration::from_millis(self.initial_delay_ms))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
