//! Session core for the air-quality dashboard client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard lets administrators and guests sign in and track
//! air-quality measurements for cities. This crate owns the part with real
//! failure-handling design: the session lifecycle. An external identity
//! provider hands the app an opaque bearer token; [`state::session::SessionStore`]
//! persists it, exchanges it for a role-qualified identity via the backend's
//! `/me` endpoint, re-validates it across reloads, and clears it on expiry
//! or rejection. [`routes::guard::decide`] maps the resolved session plus a
//! requested destination to an allow/redirect outcome for every protected
//! surface. Rendering and the air-quality domain data live with the UI and
//! backend, not here.

pub mod config;
pub mod net;
pub mod routes;
pub mod state;
pub mod storage;
pub mod util;

pub use config::ApiConfig;
pub use routes::guard::{Destination, Outcome, Redirect, decide};
pub use state::session::{Role, Session, SessionError, SessionStatus, SessionStore};
pub use storage::{MemoryStorage, SessionStorage};
