//! Request-line parsing
//!
//! Only the first line of the request is consulted. It is split on
//! whitespace and the second token is taken as the resource target.
//! Headers and bodies are never looked at.

use std::fmt;

/// First line of a request, `METHOD SP TARGET [SP VERSION]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub target: String,
    pub version: Option<String>,
}

/// Why a request line could not produce a target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Peer closed the connection without sending anything
    Empty,
    /// First line has fewer than two whitespace-delimited tokens
    Malformed,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty request"),
            Self::Malformed => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for RequestError {}

/// Extract the request line from raw request bytes
///
/// Invalid UTF-8 is decoded lossily so arbitrary client input can never
/// abort the handler.
pub fn parse_request_line(raw: &[u8]) -> Result<RequestLine, RequestError> {
    if raw.is_empty() {
        return Err(RequestError::Empty);
    }

    let text = String::from_utf8_lossy(raw);
    let first_line = text.split('\n').next().unwrap_or_default();

    let mut tokens = first_line.split_whitespace();
    let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
        return Err(RequestError::Malformed);
    };

    Ok(RequestLine {
        method: method.to_string(),
        target: target.to_string(),
        version: tokens.next().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_get() {
        let line =
            parse_request_line(b"GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
        assert_eq!(line.method, "GET");
        assert_eq!(line.target, "/index.html");
        assert_eq!(line.version.as_deref(), Some("HTTP/1.1"));
    }

    #[test]
    fn test_parse_root_target() {
        let line = parse_request_line(b"GET / HTTP/1.1\n\n").unwrap();
        assert_eq!(line.target, "/");
    }

    #[test]
    fn test_headers_are_ignored() {
        // a header line that looks like a request line must not be used
        let line = parse_request_line(b"GET /a.html HTTP/1.1\r\nX-Fake: /b.html\r\n\r\n").unwrap();
        assert_eq!(line.target, "/a.html");
    }

    #[test]
    fn test_two_tokens_without_version() {
        let line = parse_request_line(b"GET /legacy\r\n").unwrap();
        assert_eq!(line.target, "/legacy");
        assert_eq!(line.version, None);
    }

    #[test]
    fn test_extra_whitespace_between_tokens() {
        let line = parse_request_line(b"GET \t /spaced.html   HTTP/1.0\r\n").unwrap();
        assert_eq!(line.target, "/spaced.html");
    }

    #[test]
    fn test_empty_request() {
        assert_eq!(parse_request_line(b""), Err(RequestError::Empty));
    }

    #[test]
    fn test_single_token_is_malformed() {
        assert_eq!(
            parse_request_line(b"GET\r\n\r\n"),
            Err(RequestError::Malformed)
        );
        assert_eq!(parse_request_line(b"GET"), Err(RequestError::Malformed));
    }

    #[test]
    fn test_blank_first_line_is_malformed() {
        assert_eq!(
            parse_request_line(b"\r\nGET / HTTP/1.1\r\n"),
            Err(RequestError::Malformed)
        );
        assert_eq!(parse_request_line(b"   "), Err(RequestError::Malformed));
    }

    #[test]
    fn test_invalid_utf8_does_not_panic() {
        let line = parse_request_line(b"GET /caf\xff.html HTTP/1.1\r\n").unwrap();
        assert_eq!(line.method, "GET");
        assert!(line.target.starts_with("/caf"));
    }
}
