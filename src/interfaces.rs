//! Interface layer
//!
//! HTTP/JSON web service and embedded web UI.

pub mod web;
