//! Simulated file upload
//!
//! The mock API has no upload endpoint, so attachments travel inline as
//! base64 `data:` URLs on the post payload. Only small images are accepted.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::info;

use crate::error::{RestdeskError, RestdeskResult};

/// Largest accepted attachment (1 MiB)
pub const MAX_ATTACHMENT_BYTES: u64 = 1024 * 1024;

/// Accepted image types
pub const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

/// An encoded attachment ready to ride on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name
    pub file_name: String,
    /// MIME type derived from the extension
    pub mime_type: &'static str,
    /// Size of the raw file in bytes
    pub size: u64,
    /// `data:<mime>;base64,<payload>`
    pub data_url: String,
}

/// MIME type for a file name, by extension
pub fn mime_for(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

/// Validate and encode raw bytes
pub fn encode_bytes(file_name: &str, bytes: &[u8]) -> RestdeskResult<Attachment> {
    let size = bytes.len() as u64;
    check_size(size)?;
    let mime_type = check_type(file_name)?;

    let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes));
    info!(file = file_name, size, "attachment encoded");

    Ok(Attachment {
        file_name: file_name.to_string(),
        mime_type,
        size,
        data_url,
    })
}

/// Validate and encode a file on disk
///
/// Size and type are checked from metadata before the file is read.
pub fn encode_file(path: &Path) -> RestdeskResult<Attachment> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let metadata =
        std::fs::metadata(path).map_err(|_| RestdeskError::Upload("Failed to read file".into()))?;
    check_size(metadata.len())?;
    check_type(&file_name)?;

    let bytes =
        std::fs::read(path).map_err(|_| RestdeskError::Upload("Failed to read file".into()))?;
    encode_bytes(&file_name, &bytes)
}

fn check_size(size: u64) -> RestdeskResult<()> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(RestdeskError::Upload("File too large (Max 1MB)".into()));
    }
    Ok(())
}

fn check_type(file_name: &str) -> RestdeskResult<&'static str> {
    mime_for(file_name)
        .filter(|mime| ALLOWED_TYPES.contains(mime))
        .ok_or_else(|| {
            RestdeskError::Upload("Invalid file type (JPG, PNG, GIF, WEBP only)".into())
        })
}
