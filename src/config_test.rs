use super::*;

use std::sync::{Mutex, PoisonError};

// =============================================================================
// ApiConfig::from_env — env manipulation requires unsafe in edition 2024.
// We wrap in unsafe blocks; the env tests serialize on ENV_LOCK so they stay
// race-free under the default parallel test threads.
// =============================================================================

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// # Safety
/// Callers must hold `ENV_LOCK` to avoid env races.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("API_BASE_URL");
    }
}

#[test]
fn from_env_set_returns_some() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe {
        clear_api_env();
        std::env::set_var("API_BASE_URL", "http://localhost:8001");
    }
    let config = ApiConfig::from_env();
    assert!(config.is_some());
    assert_eq!(config.unwrap().base_url, "http://localhost:8001");
    unsafe { clear_api_env() };
}

#[test]
fn from_env_missing_returns_none() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    unsafe { clear_api_env() };
    assert!(ApiConfig::from_env().is_none());
}

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_joins_path() {
    let config = ApiConfig::new("http://localhost:8001");
    assert_eq!(config.endpoint("/me"), "http://localhost:8001/me");
}

#[test]
fn new_strips_trailing_slash() {
    let config = ApiConfig::new("http://localhost:8001/");
    assert_eq!(config.endpoint("/me"), "http://localhost:8001/me");
}

#[test]
fn new_strips_repeated_trailing_slashes() {
    let config = ApiConfig::new("http://localhost:8001//");
    assert_eq!(config.base_url, "http://localhost:8001");
}

#[test]
fn default_timeout_is_bounded() {
    let config = ApiConfig::new("http://localhost:8001");
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    assert!(config.request_timeout > Duration::ZERO);
}
