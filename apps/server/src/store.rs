//! # Document Store
//!
//! Persists rendered receipt PDFs on the filesystem and issues public URLs
//! for them.
//!
//! ## Naming
//! ```text
//! receipt-20260826143501-9f3a1c2e4b5d4f6e8a7b9c0d1e2f3a4b.pdf
//!         └── UTC seconds ┘└────────── UUID v4 ─────────────┘
//! ```
//! The timestamp prefix keeps directory listings humanly sortable; the
//! UUID suffix makes names collision-free across concurrent requests.
//! A second-granularity timestamp alone would collide whenever two
//! requests land in the same second.
//!
//! ## Lifecycle
//! Append-only: this store never reads, overwrites, or deletes. Retention
//! of stored documents is an external concern.

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

// =============================================================================
// Types
// =============================================================================

/// Reference to a stored document: its unique name and public URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocumentRef {
    /// Unique filename within the media root.
    pub storage_name: String,

    /// Publicly resolvable URL: `<base_url>/<storage_name>`.
    pub public_url: String,
}

/// Document persistence failures. Always fatal to the request: no URL or
/// QR image may be produced for a document that was never durably written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create media root {path}: {source}")]
    CreateRoot {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write document {name}: {source}")]
    Write {
        name: String,
        source: std::io::Error,
    },
}

// =============================================================================
// Store
// =============================================================================

/// Filesystem-backed store for rendered receipt documents.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Directory documents are written into. Created on first store.
    media_root: PathBuf,

    /// Public base URL prepended to storage names.
    base_url: String,
}

impl DocumentStore {
    /// Creates a store over the given media root and public base URL.
    ///
    /// Trailing slashes on `base_url` are trimmed so URL joining is
    /// unambiguous.
    pub fn new(media_root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        DocumentStore {
            media_root: media_root.into(),
            base_url,
        }
    }

    /// Persists PDF bytes under a fresh collision-free name and returns
    /// the stored reference.
    ///
    /// ## Failure Mode
    /// Any I/O failure (missing permissions, disk full) aborts with a
    /// [`StoreError`]; the pipeline must not continue past it.
    pub async fn store(&self, bytes: &[u8]) -> Result<StoredDocumentRef, StoreError> {
        let storage_name = Self::generate_name();
        let path = self.media_root.join(&storage_name);

        tokio::fs::create_dir_all(&self.media_root)
            .await
            .map_err(|source| StoreError::CreateRoot {
                path: self.media_root.display().to_string(),
                source,
            })?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StoreError::Write {
                name: storage_name.clone(),
                source,
            })?;

        let public_url = format!("{}/{}", self.base_url, storage_name);
        info!(name = %storage_name, bytes = bytes.len(), "Stored receipt document");
        debug!(url = %public_url, "Issued public URL");

        Ok(StoredDocumentRef {
            storage_name,
            public_url,
        })
    }

    /// Generates a unique storage name: UTC timestamp prefix plus UUID v4.
    fn generate_name() -> String {
        format!(
            "receipt-{}-{}.pdf",
            Utc::now().format("%Y%m%d%H%M%S"),
            Uuid::new_v4().simple()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_names_are_distinct() {
        // The collision property: names generated back-to-back (same
        // second, guaranteed) never repeat.
        let names: HashSet<String> = (0..1000).map(|_| DocumentStore::generate_name()).collect();
        assert_eq!(names.len(), 1000);
    }

    #[test]
    fn test_name_shape() {
        let name = DocumentStore::generate_name();
        assert!(name.starts_with("receipt-"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = DocumentStore::new("/tmp/media", "http://localhost:8000/media/");
        assert_eq!(store.base_url, "http://localhost:8000/media");
    }

    #[tokio::test]
    async fn test_store_writes_file_and_builds_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::new(dir.path(), "http://localhost:8000/media");

        let stored = store.store(b"%PDF-1.3 test").await.unwrap();
        assert_eq!(
            stored.public_url,
            format!("http://localhost:8000/media/{}", stored.storage_name)
        );

        let on_disk = std::fs::read(dir.path().join(&stored.storage_name)).unwrap();
        assert_eq!(on_disk, b"%PDF-1.3 test");
    }

    #[tokio::test]
    async fn test_store_creates_media_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("media");
        let store = DocumentStore::new(&nested, "http://localhost/media");

        store.store(b"doc").await.unwrap();
        assert!(nested.is_dir());
    }

    #[tokio::test]
    async fn test_store_failure_on_unwritable_root() {
        // A file where the media root should be makes create_dir_all fail.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let store = DocumentStore::new(&blocker, "http://localhost/media");
        let err = store.store(b"doc").await.unwrap_err();
        assert!(matches!(err, StoreError::CreateRoot { .. }));
    }
}
