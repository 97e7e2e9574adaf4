//! Startup error type
//!
//! Only failures that happen before the accept loop runs are allowed to
//! stop the process. Per-connection failures stay `std::io::Error` and are
//! logged by the server module.

use std::fmt;
use std::net::SocketAddr;

#[derive(Debug)]
pub enum ServerError {
    /// Configuration could not be loaded or is invalid
    Config(config::ConfigError),
    /// Listening socket could not be created or bound
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    /// Any other I/O failure during startup (log files, runtime)
    Io(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Bind { addr, source } => write!(f, "failed to bind {addr}: {source}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Bind { source, .. } => Some(source),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(e: config::ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for ServerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
