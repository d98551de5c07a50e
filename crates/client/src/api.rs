//! HTTP client for the reservation intake endpoint.
//!
//! Wraps `POST /api/v1/reservation/send` using [`reqwest`].

use async_trait::async_trait;
use bistro_core::reservation::ReservationFields;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// The `{ success, message }` envelope returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Sends one reservation per call. No retries.
#[async_trait]
pub trait ReservationApi: Send + Sync {
    async fn send_reservation(&self, fields: &ReservationFields) -> Result<ApiReply, ClientError>;
}

/// [`ReservationApi`] over HTTP.
pub struct HttpReservationClient {
    client: reqwest::Client,
    url: String,
}

impl HttpReservationClient {
    /// Create a client that sends the configured `Origin` on every request.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let origin = HeaderValue::from_str(&config.origin)
            .map_err(|_| ClientError::InvalidOrigin(config.origin.clone()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ORIGIN, origin);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            url: config.send_url(),
        }
    }
}

#[async_trait]
impl ReservationApi for HttpReservationClient {
    /// Error statuses still carry the envelope, so the body is decoded for
    /// every status. A reply only counts as success when both the status and
    /// the `success` flag say so.
    async fn send_reservation(&self, fields: &ReservationFields) -> Result<ApiReply, ClientError> {
        let response = self.client.post(&self.url).json(fields).send().await?;

        let status = response.status();
        let mut reply: ApiReply = response.json().await?;
        reply.success &= status.is_success();

        tracing::debug!(%status, success = reply.success, "Reservation request completed");
        Ok(reply)
    }
}
