//! # Image Export
//!
//! Saves rendered symbols to disk. The format follows the file extension
//! (`.png`, `.jpg`/`.jpeg`); anything else is rejected before any I/O.
//!
//! Writes are atomic from the target's point of view: the image is encoded
//! fully in memory, written to a sibling temp file and renamed into place.
//! A failure at any stage leaves whatever was previously at the target
//! path untouched and no partial file behind.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::Local;
use image::{ImageFormat, RgbImage};

use crate::error::SelloError;

/// Supported export formats, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    /// Pick the format for a target path.
    ///
    /// # Errors
    ///
    /// [`SelloError::Save`] when the extension is missing or not one of
    /// `png`, `jpg`, `jpeg` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, SelloError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => Ok(ExportFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(ExportFormat::Jpeg),
            Some(other) => Err(SelloError::Save(format!(
                "Unsupported image format '.{}' (use .png, .jpg or .jpeg)",
                other
            ))),
            None => Err(SelloError::Save(format!(
                "No file extension on '{}' (use .png, .jpg or .jpeg)",
                path.display()
            ))),
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Save `image` at `path`, format chosen by the extension.
///
/// # Errors
///
/// [`SelloError::Save`] for format problems, [`SelloError::Io`] for
/// filesystem failures. On error the target path is left as it was.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), SelloError> {
    let format = ExportFormat::from_path(path)?;

    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), format.image_format())
        .map_err(|e| SelloError::Save(format!("Cannot encode '{}': {}", path.display(), e)))?;

    let tmp = temp_sibling(path);
    if let Err(e) = fs::write(&tmp, &encoded).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

// Sibling name keeps the final rename on one filesystem.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "image".into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Timestamped default export name: `qr-YYYYMMDD-HHMMSS.png`.
pub fn default_file_name() -> String {
    format!("qr-{}.png", Local::now().format("%Y%m%d-%H%M%S"))
}
