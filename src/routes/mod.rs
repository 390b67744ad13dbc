//! Navigation decisions for route dispatch.

pub mod guard;
