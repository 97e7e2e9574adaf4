//! HTTP protocol layer module
//!
//! Request-line parsing and response framing, independent of where the
//! response body comes from.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{parse_request_line, RequestError, RequestLine};
pub use response::{Response, StatusCode};
