//! File upload models.
//!
//! The provider accepts small files (CSV/XLSX exports) as base64 payloads on
//! `POST /file`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Request body for `POST /file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadRequest {
    /// File name, including extension.
    pub filename: String,

    /// MIME type of the content, e.g. `text/csv`.
    #[serde(rename = "mimeType")]
    pub mime_type: String,

    /// Base64-encoded file content.
    pub content: String,
}

impl FileUploadRequest {
    /// Creates an upload request, base64-encoding the raw bytes.
    pub fn from_bytes(
        filename: impl Into<String>,
        mime_type: impl Into<String>,
        content: &[u8],
    ) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
            content: STANDARD.encode(content),
        }
    }

    /// Decodes the content back to raw bytes.
    pub fn decode_content(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.content)
    }
}

/// Upload acknowledgement returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadAck {
    /// Server-side file identifier, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// File name as stored.
    #[serde(default)]
    pub filename: String,

    /// Public or signed URL for the stored file, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
