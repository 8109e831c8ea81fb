//! Loading problem files from disk as attachments.

use std::path::Path;

use unfold_ai::Attachment;
use unfold_common::UnfoldError;

/// Inline data above this size is rejected by the provider anyway.
pub const MAX_ATTACHMENT_BYTES: u64 = 20 * 1024 * 1024;

/// MIME type for a problem file, by extension.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

pub async fn load_attachment(path: &Path) -> Result<Attachment, UnfoldError> {
    let mime = mime_for(path).ok_or_else(|| {
        UnfoldError::Attachment(format!(
            "unsupported file type: {} (expected an image or PDF)",
            path.display()
        ))
    })?;

    let size = tokio::fs::metadata(path).await?.len();
    if size > MAX_ATTACHMENT_BYTES {
        return Err(UnfoldError::Attachment(format!(
            "{} is {size} bytes, limit is {MAX_ATTACHMENT_BYTES}",
            path.display()
        )));
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "loaded attachment");
    Ok(Attachment::from_bytes(mime, &bytes))
}
