//! Infrastructure layer
//!
//! Board driver implementations.

pub mod hardware;
