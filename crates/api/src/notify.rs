//! Notification client: the outbound call to the notifier service.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use bookstock_core::LowStockAlert;

pub const DEFAULT_NOTIFIER_URL: &str = "http://localhost:4000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// A low-stock delivery that did not succeed.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Connection failure, timeout, or other transport problem.
    #[error("notifier request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The notifier answered with a non-success status.
    #[error("notifier returned status {0}")]
    Status(StatusCode),
}

/// Synchronous (from the caller's point of view) client for the notifier
/// service. One POST per alert, no retry, no queue; the request timeout
/// bounds how long a hung notifier can hold up an update.
#[derive(Debug, Clone)]
pub struct LowStockNotifier {
    client: Client,
    base_url: String,
}

impl LowStockNotifier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build notifier http client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base URL comes from `NOTIFIER_URL` (default `http://localhost:4000`).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("NOTIFIER_URL").unwrap_or_else(|_| DEFAULT_NOTIFIER_URL.to_string());
        Self::new(base_url)
    }

    pub async fn notify(&self, alert: &LowStockAlert) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(format!("{}/notify", self.base_url))
            .json(alert)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status()));
        }
        Ok(())
    }
}
