//! Domain layer
//!
//! Typed board commands, validation, and the hardware capability interface.

pub mod board;
