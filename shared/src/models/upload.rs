//! Upload Model

use serde::{Deserialize, Serialize};

/// Response from `POST /uploads/` (multipart file upload)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Public URL of the stored file
    pub url: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub content_type: String,
}
