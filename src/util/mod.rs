//! Small pure helpers shared across the session core.

pub mod token;
