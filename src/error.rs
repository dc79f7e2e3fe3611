//! Error handling for directory loading operations.
//!
//! Fetch failures carry the URL, the number of attempts made and the
//! underlying cause. Parsing has no error variant: the CSV parser accepts
//! any input.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Fetch failed for {url} after {attempts} attempt(s)")]
    FetchFailure {
        url: String,
        attempts: u32,
        #[source]
        cause: FetchCause,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Could not read config file {path}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No facility matches '{selector}'")]
    FacilityNotFound { selector: String },

    #[error("Interrupted: {reason}")]
    Interrupted { reason: String },
}

/// Why a fetch gave up
#[derive(Error, Debug)]
pub enum FetchCause {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("server responded with HTTP status {0}")]
    Status(u16),
}

/// A request that never produced a response (connect, TLS, body read...)
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl DirectoryError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Status code carried by a fetch failure, if the server answered at all
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::FetchFailure {
                cause: FetchCause::Status(status),
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
