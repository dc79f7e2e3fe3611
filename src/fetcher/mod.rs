//! Bounded-retry text fetching
//!
//! [`Fetcher`] wraps an [`HttpTransport`] with exponential backoff. Only
//! transport errors are retried: once the server answers, the loop stops,
//! and a non-2xx status fails the fetch straight away.

pub mod transport;


use std::time::Duration;
use tracing::{error, info, warn};

use crate::constants::{DEFAULT_INITIAL_DELAY_MS, DEFAULT_RETRIES};
use crate::error::{DirectoryError, FetchCause, Result};

pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Attempt budget and backoff base for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub retries: u32,
    /// Wait after the first failure; doubles for each later one
    pub initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            initial_delay: Duration::from_millis(DEFAULT_INITIAL_DELAY_MS),
        }
    }
}

impl RetryPolicy {
    pub fn new(retries: u32, initial_delay: Duration) -> Self {
        Self {
            retries,
            initial_delay,
        }
    }

    /// Number of attempts actually made; never less than one
    pub fn max_attempts(&self) -> u32 {
        self.retries.max(1)
    }

    /// Wait after the failed attempt with zero-based index `attempt`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.initial_delay.saturating_mul(factor)
    }
}

/// Retrieves remote text with bounded exponential-backoff retry
#[derive(Debug, Clone)]
pub struct Fetcher<T: HttpTransport> {
    transport: T,
    policy: RetryPolicy,
}

impl<T: HttpTransport> Fetcher<T> {
    pub fn new(transport: T, policy: RetryPolicy) -> Self {
        Self { transport, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch `url` and return the body text
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 0;

        let response = loop {
            match self.transport.get(url).await {
                Ok(response) => break response,
                Err(e) if attempt + 1 >= max_attempts => {
                    error!(
                        error = %e,
                        attempts = attempt + 1,
                        "Fetch failed after all retry attempts exhausted"
                    );
                    return Err(DirectoryError::FetchFailure {
                        url: url.to_string(),
                        attempts: attempt + 1,
                        cause: FetchCause::Transport(e),
                    });
                }
                Err(e) => {
                    let delay = self.policy.delay_for(attempt);
                    attempt += 1;
                    warn!(
                        error = %e,
                        attempt = attempt,
                        max_attempts = max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        };

        let attempts = attempt + 1;
        if !response.is_success() {
            error!(status = response.status, url = url, "Server refused fetch");
            return Err(DirectoryError::FetchFailure {
                url: url.to_string(),
                attempts,
                cause: FetchCause::Status(response.status),
            });
        }

        if attempts > 1 {
            info!(attempts = attempts, "Fetch succeeded after retry");
        }
        info!("Fetched {} bytes from {}", response.body.len(), url);

        Ok(response.body)
    }
}
