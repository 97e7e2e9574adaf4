//! Minimal single-process static HTTP server.
//!
//! Each accepted connection is read once, the first request line is
//! mapped onto a file below the content root, and a `200 OK` with the
//! file bytes or a `404 Not Found` is written back before the connection
//! is closed.
//!
//! - `cli`: command-line arguments
//! - `config`: layered configuration and shared state
//! - `http`: request-line parsing and response framing
//! - `handler`: path resolution and the file store
//! - `server`: listener, accept loop and connection handling
//! - `logger`: startup, echo, access and error logging

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

#[cfg(test)]
mod test_support;

pub use crate::config::Config;
pub use crate::error::ServerError;
