//! HTTP client for the dashboard backend.
//!
//! ARCHITECTURE
//! ============
//! The session store talks to the backend only through the [`IdentityApi`]
//! trait so verification is testable without a server. [`HttpApi`] is the
//! production implementation; it also carries the protected resource calls
//! (admin user listing, per-city air-quality history) that reuse the same
//! bearer-credential plumbing.
//!
//! ERROR HANDLING
//! ==============
//! 401/403 map to [`ApiError::Unauthorized`] with the server's `detail` when
//! one is present; consumers of protected resources translate that into a
//! session logout. Transport failures and malformed bodies are separate
//! variants so the store can report "network" versus "authentication"
//! causes.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{AdminUser, AirQualityHistory, ErrorBody, Identity};
use crate::config::ApiConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credential (HTTP 401 or 403).
    #[error("unauthorized{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Unauthorized { detail: Option<String> },
    /// Any other non-2xx status.
    #[error("unexpected status {status}")]
    Status { status: u16, detail: Option<String> },
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),
    /// 2xx response whose body did not match the wire schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Server-provided error detail, when the body carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Malformed(_) => None,
        }
    }
}

/// Exchange a bearer token for a resolved role + email.
#[async_trait(?Send)]
pub trait IdentityApi {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, ApiError>;
}

/// Real backend client over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    /// Build a client with the config's bounded request timeout.
    ///
    /// # Errors
    /// Returns [`ApiError::Network`] if the TLS backend cannot initialize.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn get_authorized(&self, path: &str, token: &str) -> Result<reqwest::Response, ApiError> {
        let resp = self
            .client
            .get(self.config.endpoint(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp).await
    }

    /// List all registered accounts. Admin-only on the backend.
    pub async fn fetch_admin_users(&self, token: &str) -> Result<Vec<AdminUser>, ApiError> {
        let resp = self.get_authorized("/admin/users", token).await?;
        resp.json::<Vec<AdminUser>>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Fetch the measurement history for one city.
    pub async fn fetch_air_quality(&self, token: &str, location: &str) -> Result<AirQualityHistory, ApiError> {
        let resp = self.get_authorized(&format!("/air-quality/{location}"), token).await?;
        resp.json::<AirQualityHistory>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

#[async_trait(?Send)]
impl IdentityApi for HttpApi {
    async fn resolve_identity(&self, token: &str) -> Result<Identity, ApiError> {
        let resp = self.get_authorized("/me", token).await?;
        resp.json::<Identity>()
            .await
            .map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

/// Map a non-2xx response to the matching [`ApiError`], reading the
/// FastAPI `detail` field when the body has one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail);
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(ApiError::Unauthorized { detail });
    }
    Err(ApiError::Status { status: status.as_u16(), detail })
}
