//! Logger module
//!
//! Provides logging utilities for the HTTP server including:
//! - Server lifecycle logging
//! - Raw request echo
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::io::Write;
use std::net::SocketAddr;

/// Verbosity threshold, ordered from quietest to loudest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    /// Parse a level name, unknown names fall back to `Info`
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "trace" => Self::Debug,
            _ => Self::Info,
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        Level::parse(&config.logging.level),
    )
}

/// Kind of line written to the info/access target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    /// Startup notice, written at every level
    Notice,
    /// Access log entry, gated by `logging.access_log` only
    Access,
    Info,
    Debug,
}

impl Line {
    const fn required(self) -> Option<Level> {
        match self {
            Self::Notice | Self::Access => None,
            Self::Info => Some(Level::Info),
            Self::Debug => Some(Level::Debug),
        }
    }
}

fn passes(threshold: Level, required: Option<Level>) -> bool {
    required.map_or(true, |level| level <= threshold)
}

fn enabled(required: Option<Level>) -> bool {
    writer::get().map_or(true, |w| passes(w.level(), required))
}

/// Write to info/access log
fn write_info(line: Line, message: &str) {
    if !enabled(line.required()) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(level: Level, message: &str) {
    if !enabled(Some(level)) {
        return;
    }
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(
        Line::Notice,
        &format!("Serving HTTP on port {} ...", addr.port()),
    );
    write_info(Line::Info, &format!("Listening on: http://{addr}"));
    write_info(Line::Info, &format!("Content root: {}", config.site.root));
    write_info(Line::Info, &format!("Index resource: {}", config.site.index));
    if config.server.concurrent {
        write_info(Line::Info, "Connections handled as independent tasks");
    } else {
        write_info(Line::Info, "Connections handled one at a time");
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(Line::Info, &format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(Line::Info, &format!("Error log: {path}"));
    }
}

/// Echo the raw request bytes to standard output
pub fn log_request_echo(raw: &[u8]) {
    let text = String::from_utf8_lossy(raw);
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{text}");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(Line::Debug, &format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(peer_addr: &SocketAddr, err: &std::io::Error) {
    write_error(
        Level::Error,
        &format!("[ERROR] Failed to serve connection from {peer_addr}: {err}"),
    );
}

pub fn log_error(message: &str) {
    write_error(Level::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(Level::Warn, &format!("[WARN] {message}"));
}

pub fn log_shutdown() {
    write_info(Line::Info, "[Shutdown] Stopped accepting connections");
}

/// Log formatted access log entry
///
/// Written whenever it is called; `logging.access_log` decides that, not
/// the level.
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(Line::Access, &entry.format(format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("error"), Level::Error);
        assert_eq!(Level::parse("WARN"), Level::Warn);
        assert_eq!(Level::parse("warning"), Level::Warn);
        assert_eq!(Level::parse("debug"), Level::Debug);
        assert_eq!(Level::parse("info"), Level::Info);
        assert_eq!(Level::parse("nonsense"), Level::Info);
    }

    #[test]
    fn test_notice_and_access_ignore_level() {
        for threshold in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert!(passes(threshold, Line::Notice.required()));
            assert!(passes(threshold, Line::Access.required()));
        }
    }

    #[test]
    fn test_info_and_debug_follow_level() {
        assert!(!passes(Level::Warn, Line::Info.required()));
        assert!(passes(Level::Info, Line::Info.required()));
        assert!(!passes(Level::Info, Line::Debug.required()));
        assert!(passes(Level::Debug, Line::Debug.required()));
        assert!(passes(Level::Warn, Some(Level::Warn)));
        assert!(!passes(Level::Error, Some(Level::Warn)));
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
    }
}
