//! Configuration types for generation-client.

use std::time::Duration;

/// Default address of the generation backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// How long the demo listing may take before the gallery falls back to empty.
pub const DEFAULT_DEMOS_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for reaching the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g., "http://localhost:5001"), without a
    /// trailing slash.
    pub base_url: String,
    /// Per-request limit for `GET /demos`. Generation requests have none.
    pub demos_timeout: Duration,
}

impl ApiConfig {
    /// Create a new configuration with the given base URL.
    ///
    /// A trailing `/` is dropped so relative media paths can be appended
    /// directly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            demos_timeout: DEFAULT_DEMOS_TIMEOUT,
        }
    }

    /// Set the demo listing timeout.
    pub fn with_demos_timeout(mut self, timeout: Duration) -> Self {
        self.demos_timeout = timeout;
        self
    }

    /// Get the generation endpoint URL.
    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url)
    }

    /// Get the demo listing endpoint URL.
    pub fn demos_url(&self) -> String {
        format!("{}/demos", self.base_url)
    }

    /// Turn a media URL returned by the backend into an absolute one.
    ///
    /// URLs already starting with `http` are kept; anything else is treated
    /// as a path on the backend. Empty input stays empty.
    pub fn absolutize(&self, url: &str) -> String {
        if url.is_empty() || url.starts_with("http") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
