use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

use crate::foundation::error::{CardError, CardResult};

/// Read a photo file and embed it as a `data:` URI the card can reference.
#[tracing::instrument(level = "debug")]
pub fn photo_data_uri(path: &Path) -> CardResult<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
    photo_data_uri_from_bytes(&bytes)
}

/// Embed already-loaded photo bytes. The format is sniffed from the content.
pub fn photo_data_uri_from_bytes(bytes: &[u8]) -> CardResult<String> {
    let format = image::guess_format(bytes)
        .map_err(|e| CardError::validation(format!("unrecognized photo format: {e}")))?;
    let mime = mime_for(format)
        .ok_or_else(|| CardError::validation(format!("unsupported photo format {format:?}")))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    tracing::debug!(mime, bytes = bytes.len(), "embedded photo");
    Ok(format!("data:{mime};base64,{encoded}"))
}

/// Formats the capture step can decode.
fn mime_for(format: image::ImageFormat) -> Option<&'static str> {
    match format {
        image::ImageFormat::Png => Some("image/png"),
        image::ImageFormat::Jpeg => Some("image/jpeg"),
        image::ImageFormat::Gif => Some("image/gif"),
        image::ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/unit/assets.rs"]
mod tests;
