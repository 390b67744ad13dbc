//! Client-side state owned by the session core.

pub mod session;
