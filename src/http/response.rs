//! HTTP response building module
//!
//! A response is a status line, a blank separator line and the body. No
//! headers are emitted.

use crate::config::LineEnding;

/// Status codes this server produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    NotFound,
}

impl StatusCode {
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
        }
    }
}

/// One response, built once per connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Response {
    /// Build 200 OK response carrying the resource verbatim
    pub const fn ok(body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            body,
        }
    }

    /// Build 404 Not Found response with a fixed message
    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NotFound,
            body: message.as_bytes().to_vec(),
        }
    }

    /// Serialize to the exact bytes written to the socket
    pub fn to_bytes(&self, line_ending: LineEnding) -> Vec<u8> {
        let eol = line_ending.as_str();
        let head = format!(
            "HTTP/1.1 {} {}{eol}{eol}",
            self.status.as_u16(),
            self.status.reason()
        );

        let mut out = Vec::with_capacity(head.len() + self.body.len());
        out.extend_from_slice(head.as_bytes());
        out.extend_from_slice(&self.body);
        out
    }
}
