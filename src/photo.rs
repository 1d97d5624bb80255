//! Product photo loading
//!
//! Reads an image file and renders it as the `data:` URL the completion API
//! expects for multimodal messages. Bytes are sent as-is; resizing and
//! recompression are left to the user.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{ListerError, Result};

/// A product photo loaded into memory.
#[derive(Debug, Clone)]
pub struct Photo {
    /// MIME type inferred from the file extension.
    pub mime: &'static str,
    bytes: Vec<u8>,
}

impl Photo {
    /// Load a photo from disk. Fails for unreadable files and for
    /// extensions that are not a supported image type.
    pub fn load(path: &Path) -> Result<Self> {
        let mime = mime_for_extension(path).ok_or_else(|| {
            ListerError::Photo(format!(
                "Unsupported image type: {}. Supported: jpg, jpeg, png, gif, webp",
                path.display()
            ))
        })?;

        let bytes = std::fs::read(path)?;
        Ok(Self { mime, bytes })
    }

    /// Render the photo as a `data:{mime};base64,{payload}` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn mime_for_extension(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
