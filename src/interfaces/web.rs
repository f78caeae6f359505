//! Web interface
//!
//! HTTP/JSON endpoints for driving the board, the embedded browser UI, and
//! CORS handling for cross-origin clients such as the Scratch extension.

mod assets;
mod cors;
mod error_response;
mod handlers;
mod models;

pub mod server;

pub(crate) use handlers::BoardState;
