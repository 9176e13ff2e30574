// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use std::path::Path;

#[cfg(not(target_arch = "wasm32"))]
use std::error::Error;

/// Raster formats the decoder is built with.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Whether a declared media type names an image payload.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Extension-based fallback for platforms that supply no media type with a
/// dropped file.
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Asynchronously loads the raw bytes of an image file.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_image_bytes(path: &Path) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
    Ok(tokio::fs::read(path).await?)
}
