//! Turns an image path into an inline content part.

use super::providers::InlinePart;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Guess the image MIME type from the file extension, defaulting to JPEG.
pub fn image_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        _ => DEFAULT_IMAGE_MIME,
    }
}

/// Read the file at `path` and base64-encode it.
pub async fn load_inline_image(path: impl AsRef<Path>) -> std::io::Result<InlinePart> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await?;

    tracing::debug!(
        path = %path.display(),
        size = bytes.len(),
        "Loaded inline image"
    );

    Ok(InlinePart {
        mime_type: image_mime_type(path).to_string(),
        data: STANDARD.encode(bytes),
    })
}
