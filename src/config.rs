//! Client configuration

/// Configuration for connecting to the restaurant availability endpoint
#[derive(Debug, Clone)]
pub struct ReserveConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ReserveConfig {
    /// Create a new configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an availability client from this configuration
    pub fn build_client(&self) -> super::AvailabilityClient {
        super::AvailabilityClient::new(self)
    }
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
