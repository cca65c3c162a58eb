//! Media storage abstraction for course cover images.
//!
//! The trait keeps handlers independent of where binary assets actually
//! live: the default [`LocalMediaStorage`] writes to a directory on disk and
//! serves files under a configured public URL, and a CDN or object-store
//! backend can replace it without touching business logic.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use tokio::fs;

use crate::config::storage::StorageConfig;

/// Abstract media storage backend.
pub trait MediaStorage: Send + Sync {
    /// Persist `content` under `key` and return the durable public URL.
    ///
    /// The URL is what gets written into the course row, so implementations
    /// must only return once the asset is actually stored.
    fn store<'a>(
        &'a self,
        key: &'a str,
        content: &'a [u8],
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, StorageError>> + Send + 'a>>;

    /// Delete an asset by key. Deleting a missing asset is not an error.
    fn delete<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>>;
}

/// Error type for media storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// Upload exceeds the maximum allowed size.
    InvalidFileSize { max_bytes: usize },

    /// MIME type not in the allow-list.
    InvalidMimeType {
        received: String,
        allowed: Vec<String>,
    },

    /// Invalid storage key format.
    InvalidKey(String),

    /// I/O failure in the backend.
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileSize { max_bytes } => {
                write!(f, "File exceeds maximum size of {} bytes", max_bytes)
            }
            Self::InvalidMimeType { received, allowed } => {
                write!(
                    f,
                    "MIME type '{}' not allowed. Allowed types: {}",
                    received,
                    allowed.join(", ")
                )
            }
            Self::InvalidKey(msg) => write!(f, "Invalid storage key: {}", msg),
            Self::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Local filesystem media storage.
#[derive(Clone, Debug)]
pub struct LocalMediaStorage {
    config: StorageConfig,
}

impl LocalMediaStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    fn checked_path(
        &self,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        if content.len() > self.config.max_file_size {
            return Err(StorageError::InvalidFileSize {
                max_bytes: self.config.max_file_size,
            });
        }

        if !self
            .config
            .allowed_mime_types
            .iter()
            .any(|m| m == content_type)
        {
            return Err(StorageError::InvalidMimeType {
                received: content_type.to_string(),
                allowed: self.config.allowed_mime_types.clone(),
            });
        }

        Ok(PathBuf::from(&self.config.upload_dir).join(key))
    }
}

impl MediaStorage for LocalMediaStorage {
    fn store<'a>(
        &'a self,
        key: &'a str,
        content: &'a [u8],
        content_type: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, StorageError>> + Send + 'a>> {
        Box::pin(async move {
            let path = self.checked_path(key, content, content_type)?;

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).await?;
            }
            fs::write(&path, content).await?;

            Ok(format!(
                "{}/{}",
                self.config.public_base_url.trim_end_matches('/'),
                key
            ))
        })
    }

    fn delete<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), StorageError>> + Send + 'a>> {
        Box::pin(async move {
            let path = PathBuf::from(&self.config.upload_dir).join(key);
            match fs::remove_file(&path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::Io(e)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage(dir: &std::path::Path) -> LocalMediaStorage {
        LocalMediaStorage::new(StorageConfig {
            upload_dir: dir.to_string_lossy().into_owned(),
            public_base_url: "http://localhost:3000/files".to_string(),
            max_file_size: 16,
            allowed_mime_types: vec!["image/png".to_string()],
        })
    }

    #[tokio::test]
    async fn test_store_returns_public_url_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let url = storage
            .store("course_covers/a.png", b"png-bytes", "image/png")
            .await
            .unwrap();

        assert_eq!(url, "http://localhost:3000/files/course_covers/a.png");
        let on_disk = std::fs::read(dir.path().join("course_covers/a.png")).unwrap();
        assert_eq!(on_disk, b"png-bytes");
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_upload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let result = storage
            .store("big.png", &[0u8; 32], "image/png")
            .await;

        assert!(matches!(
            result,
            Err(StorageError::InvalidFileSize { max_bytes: 16 })
        ));
    }

    #[tokio::test]
    async fn test_store_rejects_disallowed_mime_type() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let result = storage.store("a.gif", b"gif", "image/gif").await;

        assert!(matches!(result, Err(StorageError::InvalidMimeType { .. })));
    }

    #[tokio::test]
    async fn test_store_rejects_traversal_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        let result = storage.store("../escape.png", b"x", "image/png").await;

        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = test_storage(dir.path());

        assert!(storage.delete("nope.png").await.is_ok());
    }
}
