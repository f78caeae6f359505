//! # RRB Server
//!
//! HTTP/JSON interface to the RasPiRobot Board V3 (RRB3): two motors, two
//! LEDs, two switch inputs, and a sonar distance sensor, driven remotely by
//! browser UIs, a Scratch extension, and plain HTTP clients.
//!
//! The crate is layered:
//!
//! - **Domain Layer**: typed commands, validation, the board capability trait
//! - **Infrastructure Layer**: board driver implementations
//! - **Interface Layer**: the web service and embedded UI

pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use domain::*;
