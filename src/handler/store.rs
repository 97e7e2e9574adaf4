//! File store
//!
//! The resolver hands over a root-relative path, the store answers with
//! the bytes or with nothing. Every failure to read is "not found".

use crate::logger;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Read-only lookup of resource bytes by root-relative path
pub trait FileStore {
    fn fetch(&self, relative: &Path) -> impl Future<Output = Option<Vec<u8>>>;
}

/// Static content directory on disk
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileStore for DiskStore {
    async fn fetch(&self, relative: &Path) -> Option<Vec<u8>> {
        let file_path = self.root.join(relative);

        // Security: ensure file_path is within the root after symlinks
        let root_canonical = match fs::canonicalize(&self.root).await {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Static directory not found or inaccessible '{}': {e}",
                    self.root.display()
                ));
                return None;
            }
        };

        // File not found is common (404), no need to log
        let file_canonical = fs::canonicalize(&file_path).await.ok()?;
        if !file_canonical.starts_with(&root_canonical) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                relative.display(),
                file_canonical.display()
            ));
            return None;
        }

        // directories and other non-regular entries are treated as absent
        if !fs::metadata(&file_canonical).await.ok()?.is_file() {
            return None;
        }

        match fs::read(&file_canonical).await {
            Ok(content) => Some(content),
            Err(e) => {
                logger::log_error(&format!(
                    "Failed to read file '{}': {e}",
                    file_path.display()
                ));
                None
            }
        }
    }
}
