//! Auth-session state for the current browser user.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is the single writer for the session entity: the UI and
//! route dispatch read snapshots, and only `initialize` / `login` / `verify`
//! / `logout` mutate. The store mediates between the identity provider (which
//! hands the app an opaque bearer token), the backend `/me` endpoint (which
//! resolves the token to a role + email), and session-scoped persisted
//! storage (which lets the session survive a reload in the same tab).
//!
//! TRADE-OFFS
//! ==========
//! Verification results are tied to the token value and generation they were
//! issued for; a `login` or `logout` that lands while a verification is in
//! flight makes the eventual result stale, and stale results are discarded
//! rather than applied. Cancellation is logical only — the request itself is
//! not aborted, it just cannot touch newer state when it returns.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::net::api::{ApiError, IdentityApi};
use crate::storage::{EMAIL_KEY, ROLE_KEY, SessionStorage, TOKEN_KEY};
use crate::util::token::is_expired;

/// Authorization level resolved by the backend. Never trusted from client
/// input alone: the `/me` response is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Guest,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Guest => "guest",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "guest" => Some(Self::Guest),
            _ => None,
        }
    }
}

/// Derived session status. Not independently settable; computed from which
/// fields are populated and whether a verification is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated,
    Error,
}

/// Read-only snapshot of the session entity.
///
/// `role` and `email` are present iff `status == Authenticated`; `token` is
/// present whenever status is `Loading` or `Authenticated`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub email: Option<String>,
    pub status: SessionStatus,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Empty or missing token passed to `login`.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Embedded expiry in the past, detected locally without a round-trip.
    #[error("token expired")]
    TokenExpired,
    /// The backend rejected the token or returned malformed identity data.
    #[error("verification failed: {0}")]
    VerificationFailed(String),
    /// Transport failure while resolving the identity.
    #[error("network error: {0}")]
    Network(String),
}

impl SessionError {
    /// User-presentable cause recorded in `last_error`.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Invalid credentials".to_owned(),
            Self::TokenExpired => "Session expired".to_owned(),
            Self::VerificationFailed(cause) => cause.clone(),
            Self::Network(_) => "Network or server error".to_owned(),
        }
    }
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthorized { detail } => {
                Self::VerificationFailed(detail.unwrap_or_else(|| "Authentication failed".to_owned()))
            }
            ApiError::Status { status, .. } => Self::Network(format!("status {status}")),
            ApiError::Network(cause) | ApiError::Malformed(cause) => Self::Network(cause),
        }
    }
}

#[derive(Debug, Default)]
struct SessionInner {
    token: Option<String>,
    role: Option<Role>,
    email: Option<String>,
    loading: bool,
    last_error: Option<String>,
    /// Bumped by every login/logout/clear; a verification started under an
    /// older generation is stale and its result is discarded.
    generation: u64,
    /// Token value most recently confirmed by the backend, so repeated
    /// `verify` calls cost one round-trip per distinct token.
    verified_token: Option<String>,
}

/// Single source of truth for the session entity.
///
/// Cheap to clone (shared handle); intended for a single-threaded UI event
/// loop. No borrow is held across an await, so `login` and `logout` may
/// interleave with an outstanding `verify`.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<SessionInner>>,
    api: Rc<dyn IdentityApi>,
    storage: Rc<dyn SessionStorage>,
}

impl SessionStore {
    #[must_use]
    pub fn new(api: Rc<dyn IdentityApi>, storage: Rc<dyn SessionStorage>) -> Self {
        Self { inner: Rc::new(RefCell::new(SessionInner::default())), api, storage }
    }

    /// Restore the persisted session at startup.
    ///
    /// No persisted token leaves the session unauthenticated; partial
    /// persisted state (role or email without a token) is invalid and gets
    /// cleared. A live persisted token enters `Loading` and is re-verified
    /// against the backend.
    ///
    /// # Errors
    /// Propagates the verification outcome; the session state is already
    /// resolved either way.
    pub async fn initialize(&self) -> Result<(), SessionError> {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            if self.storage.get(ROLE_KEY).is_some() || self.storage.get(EMAIL_KEY).is_some() {
                tracing::debug!("clearing partial persisted session");
                self.clear();
            }
            return Ok(());
        };
        if is_expired(&token, unix_now()) {
            tracing::debug!("persisted token expired, clearing session");
            self.fail(&SessionError::TokenExpired);
            return Err(SessionError::TokenExpired);
        }
        {
            let mut inner = self.inner.borrow_mut();
            inner.token = Some(token);
            inner.loading = true;
            inner.last_error = None;
        }
        self.verify().await
    }

    /// Establish a session from a token handed over by the identity
    /// provider.
    ///
    /// With `role` and `email` supplied the session is authenticated
    /// immediately; without them it enters `Loading` and resolves via
    /// [`verify`](Self::verify).
    ///
    /// # Errors
    /// `InvalidCredentials` for an empty token, `TokenExpired` for a token
    /// already dead on arrival; both resolve the session to unauthenticated.
    pub async fn login(&self, token: &str, role: Option<Role>, email: Option<&str>) -> Result<(), SessionError> {
        if token.is_empty() {
            self.fail(&SessionError::InvalidCredentials);
            return Err(SessionError::InvalidCredentials);
        }
        if is_expired(token, unix_now()) {
            self.fail(&SessionError::TokenExpired);
            return Err(SessionError::TokenExpired);
        }

        self.storage.set(TOKEN_KEY, token);
        if let (Some(role), Some(email)) = (role, email) {
            self.storage.set(ROLE_KEY, role.as_str());
            self.storage.set(EMAIL_KEY, email);
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.token = Some(token.to_owned());
            inner.role = Some(role);
            inner.email = Some(email.to_owned());
            inner.loading = false;
            inner.last_error = None;
            inner.verified_token = None;
            tracing::info!(role = role.as_str(), "logged in");
            return Ok(());
        }

        self.storage.remove(ROLE_KEY);
        self.storage.remove(EMAIL_KEY);
        {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.token = Some(token.to_owned());
            inner.role = None;
            inner.email = None;
            inner.loading = true;
            inner.last_error = None;
            inner.verified_token = None;
        }
        tracing::info!("logged in, resolving identity");
        self.verify().await
    }

    /// Resolve the current token to a role + email via the backend.
    ///
    /// Idempotent and safe to call repeatedly: with no token it is a no-op,
    /// and a token the backend has already confirmed is not re-sent. The
    /// expiry pre-check runs locally, so an already-dead token never costs a
    /// network call. A result arriving after the token was replaced or
    /// cleared is discarded. A session that is already complete keeps its
    /// `Authenticated` status while the backend re-confirms it; only an
    /// unresolved token shows `Loading`.
    ///
    /// # Errors
    /// `TokenExpired`, `VerificationFailed`, or `Network`; each clears the
    /// session and records `last_error`.
    pub async fn verify(&self) -> Result<(), SessionError> {
        let (token, generation) = {
            let inner = self.inner.borrow();
            let Some(token) = inner.token.clone() else {
                return Ok(());
            };
            if inner.verified_token.as_deref() == Some(token.as_str()) {
                return Ok(());
            }
            (token, inner.generation)
        };

        if is_expired(&token, unix_now()) {
            tracing::debug!("token expired locally, clearing session");
            self.fail(&SessionError::TokenExpired);
            return Err(SessionError::TokenExpired);
        }

        {
            // A complete session stays authenticated while the backend
            // re-confirms it in the background; only an unresolved token
            // puts the session into loading.
            let mut inner = self.inner.borrow_mut();
            if inner.role.is_none() || inner.email.is_none() {
                inner.loading = true;
            }
        }
        let result = self.api.resolve_identity(&token).await;

        {
            let inner = self.inner.borrow();
            if inner.generation != generation || inner.token.as_deref() != Some(token.as_str()) {
                tracing::debug!("discarding stale verification result");
                return Ok(());
            }
        }

        match result {
            Ok(identity) => {
                self.storage.set(ROLE_KEY, identity.role.as_str());
                self.storage.set(EMAIL_KEY, &identity.email);
                let mut inner = self.inner.borrow_mut();
                inner.role = Some(identity.role);
                inner.email = Some(identity.email);
                inner.loading = false;
                inner.last_error = None;
                inner.verified_token = Some(token);
                tracing::info!(role = identity.role.as_str(), "session verified");
                Ok(())
            }
            Err(err) => {
                let err = SessionError::from(err);
                tracing::warn!(error = %err, "verification failed");
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Clear the session, persisted and in-memory. Idempotent.
    pub fn logout(&self) {
        if self.inner.borrow().token.is_some() {
            tracing::info!("logged out");
        }
        self.clear();
    }

    /// Current derived status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let inner = self.inner.borrow();
        derive_status(&inner)
    }

    /// Read-only snapshot of the whole session entity.
    #[must_use]
    pub fn session(&self) -> Session {
        let inner = self.inner.borrow();
        Session {
            token: inner.token.clone(),
            role: inner.role,
            email: inner.email.clone(),
            status: derive_status(&inner),
            last_error: inner.last_error.clone(),
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.borrow().token.clone()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.inner.borrow().role
    }

    #[must_use]
    pub fn email(&self) -> Option<String> {
        self.inner.borrow().email.clone()
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.inner.borrow().last_error.clone()
    }

    /// Clear everything and record a user-presentable failure cause.
    fn fail(&self, err: &SessionError) {
        self.clear();
        self.inner.borrow_mut().last_error = Some(err.user_message());
    }

    fn clear(&self) {
        self.storage.clear();
        let mut inner = self.inner.borrow_mut();
        inner.token = None;
        inner.role = None;
        inner.email = None;
        inner.loading = false;
        inner.last_error = None;
        inner.verified_token = None;
        inner.generation += 1;
    }
}

fn derive_status(inner: &SessionInner) -> SessionStatus {
    if inner.loading {
        SessionStatus::Loading
    } else if inner.token.is_some() && inner.role.is_some() && inner.email.is_some() {
        SessionStatus::Authenticated
    } else if inner.last_error.is_some() {
        SessionStatus::Error
    } else {
        SessionStatus::Unauthenticated
    }
}

fn unix_now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
