//! Resource resolution
//!
//! Turns a request target into a path relative to the content root.
//! `/` becomes the configured index resource, and the result never
//! climbs above the root.

use std::fmt;
use std::path::{Component, PathBuf};

/// Why a target could not be mapped into the content root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Target does not start with `/`
    NotAbsolute,
    /// `..` segments walk above the root
    Traversal,
    /// Normalization left nothing to look up
    Empty,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAbsolute => f.write_str("target is not an absolute path"),
            Self::Traversal => f.write_str("target escapes the content root"),
            Self::Empty => f.write_str("target names no resource"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Map a request target to a root-relative file path
///
/// Query string and fragment are dropped. `.` segments and empty segments
/// are skipped, `..` pops the previous segment.
pub fn resolve(target: &str, index: &str) -> Result<PathBuf, ResolveError> {
    let path = target
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or_default();

    if !path.starts_with('/') {
        return Err(ResolveError::NotAbsolute);
    }

    let path = if path == "/" { index } else { path };

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(ResolveError::Traversal);
                }
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        return Err(ResolveError::Empty);
    }

    let relative: PathBuf = segments.iter().collect();

    // Backslashes or drive prefixes could still produce a non-normal component
    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(ResolveError::Traversal);
    }

    Ok(relative)
}
