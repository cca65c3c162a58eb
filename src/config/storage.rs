use std::env;

/// Settings for the local media store: where cover images land on disk, the
/// public URL they are served under, and what uploads are acceptable.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub upload_dir: String,
    pub public_base_url: String,
    /// Maximum upload size in bytes
    pub max_file_size: usize,
    pub allowed_mime_types: Vec<String>,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            public_base_url: env::var("UPLOAD_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/files".to_string()),
            max_file_size: env::var("UPLOAD_MAX_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5 * 1024 * 1024),
            allowed_mime_types: vec![
                "image/jpeg".to_string(),
                "image/png".to_string(),
                "image/webp".to_string(),
            ],
        }
    }
}
