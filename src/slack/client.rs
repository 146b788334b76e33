//! Webhook delivery
//!
//! Serializes a [`Message`] and posts it to the incoming-webhook endpoint once.

use hyper::ext::ReasonPhrase;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::core::models::Message;
use crate::errors::NotifyError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Lowest status code treated as a failed delivery.
pub const FAILURE_STATUS_THRESHOLD: u16 = 299;

/// Whether the webhook accepted the message.
#[must_use]
pub fn is_delivered(status: StatusCode) -> bool {
    status.as_u16() < FAILURE_STATUS_THRESHOLD
}

/// Status line the webhook answered with, e.g. `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub code: StatusCode,
    /// Reason phrase as sent by the server, or the canonical one.
    pub reason: String,
}

impl DeliveryStatus {
    #[must_use]
    pub fn new(code: StatusCode, reason: Option<&ReasonPhrase>) -> Self {
        let reason = reason.map_or_else(
            || code.canonical_reason().unwrap_or("").to_string(),
            |phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        );
        Self { code, reason }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reason.is_empty() {
            write!(f, "{}", self.code.as_u16())
        } else {
            write!(f, "{} {}", self.code.as_u16(), self.reason)
        }
    }
}

/// Client for Slack incoming webhooks
pub struct WebhookClient {
    http_client: Client,
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookClient {
    #[must_use]
    pub fn new() -> Self {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http_client }
    }

    /// Post `message` to `webhook_url`, returning the response status line on success.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::HttpError`] when the request cannot be sent and
    /// [`NotifyError::StatusError`] when the endpoint answers with a status of
    /// 299 or above.
    pub async fn post_message(
        &self,
        webhook_url: &str,
        message: &Message,
    ) -> Result<DeliveryStatus, NotifyError> {
        let body = serde_json::to_vec(message)?;
        debug!("Posting {} byte payload to webhook", body.len());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let resp = self
            .http_client
            .post(webhook_url)
            .headers(headers)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        if !is_delivered(status) {
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!("Webhook POST failed: status={} body={}", status, body_text);
            return Err(NotifyError::StatusError(status));
        }

        let delivered = DeliveryStatus::new(status, resp.extensions().get::<ReasonPhrase>());
        info!("Webhook accepted message: status={}", delivered);
        Ok(delivered)
    }
}
