//! Networking modules for the dashboard backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the identity-resolution and protected REST calls, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod types;
