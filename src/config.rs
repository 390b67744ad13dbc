//! Dashboard API configuration loaded from environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// A hung identity-resolution call would leave the session loading forever;
/// the request is bounded so it resolves to a network error instead.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL and request bounds for the dashboard backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Load from `API_BASE_URL`. Returns `None` if it is missing
    /// (networked verification will be unavailable).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("API_BASE_URL").ok()?;
        Some(Self::new(base_url))
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, request_timeout: DEFAULT_REQUEST_TIMEOUT }
    }

    /// Full URL for an endpoint path such as `/me`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
