//! Image file loading and saving.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to read image {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Load an image file and convert it to RGBA8.
///
/// The format is detected from the file content. Missing or unreadable
/// files surface as [`IconError::Read`].
pub fn load_rgba(path: &Path) -> Result<RgbaImage, IconError> {
    let img = image::open(path).map_err(|source| IconError::Read {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "Loaded image");
    Ok(img.to_rgba8())
}

/// Save an RGBA image; the format follows the output file extension.
pub fn save_rgba(img: &RgbaImage, path: &Path) -> Result<(), IconError> {
    img.save(path).map_err(|source| IconError::Write {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), "Saved image");
    Ok(())
}
