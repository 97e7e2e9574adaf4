//! Request handler module
//!
//! Runs one request through parse, resolve and fetch, and settles on
//! exactly one response. Every failure before a successful fetch ends in
//! the 404 response; nothing here returns an error to the caller.

pub mod resolver;
pub mod store;

pub use resolver::{resolve, ResolveError};
pub use store::{DiskStore, FileStore};

use crate::config::Config;
use crate::http::{parse_request_line, RequestError, RequestLine, Response};
use std::fmt;

/// Why a request ended in 404
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Miss {
    Request(RequestError),
    Resolve(ResolveError),
    NotInStore,
}

impl Miss {
    /// Request the client got wrong, as opposed to a plain missing file
    pub const fn is_rejected(&self) -> bool {
        matches!(
            self,
            Self::Request(RequestError::Malformed) | Self::Resolve(_)
        )
    }
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "{e}"),
            Self::Resolve(e) => write!(f, "{e}"),
            Self::NotInStore => f.write_str("resource not found"),
        }
    }
}

/// Result of handling one request, kept for the access log
#[derive(Debug, Clone)]
pub struct Exchange {
    pub line: Option<RequestLine>,
    pub response: Response,
    pub miss: Option<Miss>,
}

/// Static site: a file store plus the resolution rules applied to it
#[derive(Debug, Clone)]
pub struct StaticSite<S> {
    store: S,
    index: String,
    not_found_body: String,
}

impl StaticSite<DiskStore> {
    /// Build the on-disk site described by the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            DiskStore::new(&config.site.root),
            &config.site.index,
            &config.http.not_found_body,
        )
    }
}

impl<S: FileStore> StaticSite<S> {
    pub fn new(store: S, index: &str, not_found_body: &str) -> Self {
        Self {
            store,
            index: index.to_string(),
            not_found_body: not_found_body.to_string(),
        }
    }

    #[cfg(test)]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Produce the response for raw request bytes
    pub async fn respond(&self, raw: &[u8]) -> Exchange {
        let line = match parse_request_line(raw) {
            Ok(line) => line,
            Err(e) => return self.miss(None, Miss::Request(e)),
        };

        let relative = match resolve(&line.target, &self.index) {
            Ok(p) => p,
            Err(e) => return self.miss(Some(line), Miss::Resolve(e)),
        };

        match self.store.fetch(&relative).await {
            Some(content) => Exchange {
                line: Some(line),
                response: Response::ok(content),
                miss: None,
            },
            None => self.miss(Some(line), Miss::NotInStore),
        }
    }

    fn miss(&self, line: Option<RequestLine>, miss: Miss) -> Exchange {
        Exchange {
            line,
            response: Response::not_found(&self.not_found_body),
            miss: Some(miss),
        }
    }
}
