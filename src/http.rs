//! Availability endpoint client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::{AvailabilitySlot, ReserveConfig, ReserveError, ReserveResult};

/// Read-only source of the availability snapshot.
///
/// The flow fetches through this seam so tests can inject an in-memory
/// source instead of a network client.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Fetch the ordered list of open slots for the current restaurant
    async fn available_times(&self) -> ReserveResult<Vec<AvailabilitySlot>>;
}

/// HTTP client for the restaurant availability endpoint
#[derive(Debug, Clone)]
pub struct AvailabilityClient {
    client: Client,
    base_url: String,
}

impl AvailabilityClient {
    /// Create a new client from configuration
    pub fn new(config: &ReserveConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ReserveResult<T> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ReserveResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ReserveError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ReserveError::Validation(text)),
                _ => Err(ReserveError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl AvailabilitySource for AvailabilityClient {
    async fn available_times(&self) -> ReserveResult<Vec<AvailabilitySlot>> {
        self.get("api/restaurant/available-times").await
    }
}
