//! Image MIME type detection for uploads and local files.

use std::path::Path;

/// Fallback when nothing better is known; the chat API accepts it for any common photo.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Detect an image MIME type by file extension.
pub fn detect_image_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "heic"         => "image/heic",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _              => DEFAULT_IMAGE_MIME,
    }
}

/// Detect an image MIME type from leading magic bytes.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        [b'B', b'M', ..] => Some("image/bmp"),
        _ => None,
    }
}
