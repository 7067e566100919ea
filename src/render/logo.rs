//! # Logo Compositing
//!
//! Overlays a logo at the center of a rendered symbol:
//!
//! ```text
//! base render ──► centered tile (background fill, +20 px pad)
//!                   └─► logo scaled to 1/5 of the symbol edge, Lanczos3
//! ```
//!
//! The tile is opaque, so every module under it is overwritten; the pad
//! keeps a clean quiet area between modules and logo artwork. Whether the
//! symbol still scans afterwards depends on the error correction level the
//! caller picked; nothing here enforces that.
//!
//! Logo problems never abort a render. [`LogoAsset::open`] validates the
//! file up front, and [`apply_logo`] re-reads it per render; if the file
//! has vanished or stopped decoding since import, the base image is
//! returned unchanged and a warning is logged.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::color::Color;
use crate::error::SelloError;

/// Padding around the scaled logo inside its tile, in pixels.
const PAD_PX: u32 = 20;

/// The logo spans 1/5 of the symbol's smaller edge.
const LOGO_FRACTION: u32 = 5;

/// A validated logo file.
///
/// Opening decodes the file once to reject non-images early; the pixels
/// are read again at composite time so renders always see the current
/// file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoAsset {
    path: PathBuf,
}

impl LogoAsset {
    /// Import a logo file, verifying it decodes as an image.
    ///
    /// # Errors
    ///
    /// [`SelloError::LogoDecode`] when the file is missing, unreadable or
    /// not a supported image format.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SelloError> {
        let path = path.into();
        decode(&path)?;
        Ok(Self { path })
    }

    /// Path of the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for user display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

fn decode(path: &Path) -> Result<DynamicImage, SelloError> {
    image::open(path)
        .map_err(|e| SelloError::LogoDecode(format!("Cannot read logo {}: {}", path.display(), e)))
}

/// Composite `logo` onto the center of `base`, padding with `background`.
///
/// A logo that no longer decodes leaves `base` unchanged; the failure is
/// logged, not returned. See the module docs for the geometry.
pub fn apply_logo(base: &RgbImage, logo: &LogoAsset, background: Color) -> RgbImage {
    match decode(&logo.path) {
        Ok(source) => composite(base, &source, background),
        Err(e) => {
            log::warn!("Logo left out of render: {}", e);
            base.clone()
        }
    }
}

/// Pure compositing path, split out so tests can feed in-memory images.
fn composite(base: &RgbImage, source: &DynamicImage, background: Color) -> RgbImage {
    let edge = base.width().min(base.height());
    let logo_px = edge / LOGO_FRACTION;
    let tile_px = logo_px + PAD_PX;
    if logo_px == 0 || tile_px >= edge {
        // Too small a symbol to host a tile without swallowing it.
        log::warn!("Symbol too small for a logo tile, leaving it out");
        return base.clone();
    }

    // Scale uniformly to fit the inner square; transparency survives.
    let scaled = source
        .resize(logo_px, logo_px, FilterType::Lanczos3)
        .to_rgba8();

    let mut tile = RgbaImage::from_pixel(tile_px, tile_px, background.to_pixel_alpha());
    let lx = (tile_px - scaled.width()) / 2;
    let ly = (tile_px - scaled.height()) / 2;
    imageops::overlay(&mut tile, &scaled, i64::from(lx), i64::from(ly));

    // The tile itself is fully opaque, so overlaying it replaces every
    // module pixel underneath.
    let mut canvas = DynamicImage::ImageRgb8(base.clone()).to_rgba8();
    let tx = (base.width() - tile_px) / 2;
    let ty = (base.height() - tile_px) / 2;
    imageops::overlay(&mut canvas, &tile, i64::from(tx), i64::from(ty));

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
