//! `put_control` forwarding client.
//!
//! [`ControlDelivery`] sends a JSON-encoded [`ReplyMessage`] to the callback
//! address a notification arrived with. A failed attempt is retried once
//! after a short delay; after that the error is returned to the caller,
//! which logs and drops it -- decisions are not persisted or escalated.

use std::time::Duration;

use controlpanel_core::reply::ReplyMessage;

/// Path appended to the caller's `src_addr` for decision delivery.
pub const PUT_CONTROL_PATH: &str = "/api/v1/put_control";

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Delay before the single retry.
const RETRY_DELAY: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for forwarding failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server returned a non-2xx status code.
    #[error("put_control returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// ControlDelivery
// ---------------------------------------------------------------------------

/// Delivers operator decisions to caller callback endpoints.
pub struct ControlDelivery {
    client: reqwest::Client,
}

impl ControlDelivery {
    /// Create a delivery client with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// PUT a reply message to `<callback_addr>/api/v1/put_control`.
    ///
    /// Retries once on failure, then gives up.
    pub async fn deliver(
        &self,
        callback_addr: &str,
        reply: &ReplyMessage,
    ) -> Result<(), DeliveryError> {
        let url = format!("{}{}", callback_addr.trim_end_matches('/'), PUT_CONTROL_PATH);

        match self.try_send(&url, reply).await {
            Ok(()) => return Ok(()),
            Err(e) => {
                tracing::warn!(
                    url,
                    id = %reply.id,
                    error = %e,
                    "put_control delivery failed, retrying once"
                );
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }

        match self.try_send(&url, reply).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(url, id = %reply.id, error = %e, "put_control delivery failed");
                Err(e)
            }
        }
    }

    /// Execute a single PUT request and check the response status.
    async fn try_send(&self, url: &str, reply: &ReplyMessage) -> Result<(), DeliveryError> {
        let response = self.client.put(url).json(reply).send().await?;
        if !response.status().is_success() {
            return Err(DeliveryError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

impl Default for ControlDelivery {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
