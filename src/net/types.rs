//! Wire schema for the dashboard backend.
//!
//! The backend is FastAPI-shaped: success bodies are plain JSON objects and
//! error bodies carry a human-readable `detail` field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::state::session::Role;

/// Resolved identity returned by `GET /me`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub role: Role,
    pub email: String,
}

/// FastAPI-style error body, e.g. `{"detail": "Invalid Firebase token"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// A registered account as listed by `GET /admin/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub uid: String,
    pub email: String,
    pub role: Role,
}

/// One historical measurement for a city.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQualityReading {
    #[serde(rename = "AQI")]
    pub aqi: f64,
    pub last_update: String,
}

/// Measurement history returned by `GET /air-quality/{location}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityHistory {
    pub location: String,
    pub history: Vec<AirQualityReading>,
}
