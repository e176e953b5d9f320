//! Scoped handling of the uploaded document.
//!
//! The upload only needs to live on disk long enough for text extraction,
//! so the file is owned by an RAII guard that removes it when the request
//! scope ends — success or failure. Names are sanitized against path
//! traversal and prefixed with a UUID so concurrent uploads of the same
//! filename cannot race on one path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Strips path components and unsafe characters from a client-supplied
/// filename. Only the final component survives; anything outside
/// `[A-Za-z0-9._-]` becomes `_`; leading dots are dropped so the result
/// can never be `..` or a hidden file.
pub fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

/// An uploaded file written under the upload directory, deleted on drop.
pub struct UploadGuard {
    path: PathBuf,
}

impl UploadGuard {
    /// Writes `bytes` under `upload_dir` using a UUID-prefixed sanitized
    /// form of `original_name`.
    pub fn store(upload_dir: &Path, original_name: &str, bytes: &[u8]) -> io::Result<Self> {
        fs::create_dir_all(upload_dir)?;
        let filename = format!("{}_{}", Uuid::new_v4(), sanitize_filename(original_name));
        let path = upload_dir.join(filename);
        fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for UploadGuard {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            // Nothing actionable at this point; the startup dir is local.
            tracing::warn!("Failed to remove upload '{}': {e}", self.path.display());
        }
    }
}
