//! # Module Renderer
//!
//! Turns a [`ModuleMatrix`] into a styled RGB raster:
//!
//! ```text
//! ModuleMatrix ──► quiet zone + per-module shape masks ──► RgbImage
//!                  (StyleConfig: shape, fg/bg colors)
//! ```
//!
//! ## Geometry
//!
//! Output is always square:
//! `(matrix.size() + 2 * border_modules) * module_px` pixels per edge.
//! The quiet zone is solid background; every dark module is rasterized
//! through its shape's coverage test at full opacity. No anti-aliasing,
//! no sub-pixel placement, so identical inputs produce byte-identical
//! images.
//!
//! ## Presets
//!
//! | Preset | Module edge | Use |
//! |--------|-------------|-----|
//! | [`render_preview`] | 10 px | on-screen preview |
//! | [`render_export`]  | 20 px | file export |
//!
//! Both use the standard 4-module quiet zone.

pub mod logo;
pub mod preview;
mod shapes;

use image::RgbImage;

use crate::encode::ModuleMatrix;
use crate::error::SelloError;
use crate::style::StyleConfig;

use shapes::Neighbors;

/// Module edge length for on-screen previews, in pixels.
pub const PREVIEW_MODULE_PX: u32 = 10;

/// Module edge length for high-resolution exports, in pixels.
pub const EXPORT_MODULE_PX: u32 = 20;

/// Quiet-zone width on each side, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Render a module matrix as a styled raster.
///
/// # Errors
///
/// [`SelloError::InvalidStyle`] when `module_px` is zero; a zero-size
/// module cell cannot carry any shape.
pub fn render(
    matrix: &ModuleMatrix,
    style: &StyleConfig,
    module_px: u32,
    border_modules: u32,
) -> Result<RgbImage, SelloError> {
    if module_px == 0 {
        return Err(SelloError::InvalidStyle(
            "Module size must be at least 1 pixel".to_string(),
        ));
    }

    let size = matrix.size() as u32;
    let total = (size + 2 * border_modules) * module_px;
    let fg = style.foreground.to_pixel();
    let bg = style.background.to_pixel();

    let mut image = RgbImage::from_pixel(total, total, bg);

    for my in 0..size {
        for mx in 0..size {
            if !matrix.is_dark(mx as i32, my as i32) {
                continue;
            }
            let neighbors = Neighbors::around(matrix, mx as i32, my as i32);
            let ox = (border_modules + mx) * module_px;
            let oy = (border_modules + my) * module_px;
            for py in 0..module_px {
                for px in 0..module_px {
                    if shapes::covers(style.shape, neighbors, px, py, module_px) {
                        image.put_pixel(ox + px, oy + py, fg);
                    }
                }
            }
        }
    }

    Ok(image)
}

/// Render at the preview preset: 10 px modules, 4-module quiet zone.
pub fn render_preview(matrix: &ModuleMatrix, style: &StyleConfig) -> Result<RgbImage, SelloError> {
    render(matrix, style, PREVIEW_MODULE_PX, QUIET_ZONE_MODULES)
}

/// Render at the export preset: 20 px modules, 4-module quiet zone.
pub fn render_export(matrix: &ModuleMatrix, style: &StyleConfig) -> Result<RgbImage, SelloError> {
    render(matrix, style, EXPORT_MODULE_PX, QUIET_ZONE_MODULES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::encode;
    use crate::style::{EcLevel, ModuleShape};

    fn count_pixels(image: &RgbImage, color: image::Rgb<u8>) -> usize {
        image.pixels().filter(|p| **p == color).count()
    }

    #[test]
    fn test_preview_dimensions() {
        // Version 2 symbol: (25 + 8) * 10 = 330.
        let matrix = encode::encode("https://example.com", EcLevel::M).unwrap();
        let image = render_preview(&matrix, &StyleConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (330, 330));
    }

    #[test]
    fn test_export_dimensions() {
        let matrix = encode::encode("https://example.com", EcLevel::M).unwrap();
        let image = render_export(&matrix, &StyleConfig::default()).unwrap();
        assert_eq!(image.dimensions(), (660, 660));
    }

    #[test]
    fn test_custom_geometry() {
        let matrix = encode::encode("geometry", EcLevel::M).unwrap();
        let image = render(&matrix, &StyleConfig::default(), 3, 2).unwrap();
        let expected = (matrix.size() as u32 + 4) * 3;
        assert_eq!(image.dimensions(), (expected, expected));
    }

    #[test]
    fn test_quiet_zone_is_background() {
        let matrix = encode::encode("quiet zone", EcLevel::M).unwrap();
        let style = StyleConfig::default().background(Color::new(200, 220, 255));
        let image = render_preview(&matrix, &style).unwrap();
        let bg = image::Rgb([200, 220, 255]);
        let border_px = QUIET_ZONE_MODULES * PREVIEW_MODULE_PX;
        for i in 0..image.width() {
            assert_eq!(*image.get_pixel(i, 0), bg);
            assert_eq!(*image.get_pixel(0, i), bg);
            assert_eq!(*image.get_pixel(i, border_px - 1), bg);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let matrix = encode::encode("determinism", EcLevel::M).unwrap();
        let style = StyleConfig::default().shape(ModuleShape::Rounded);
        let a = render_preview(&matrix, &style).unwrap();
        let b = render_preview(&matrix, &style).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_circle_covers_less_than_square() {
        let matrix = encode::encode("coverage", EcLevel::M).unwrap();
        let square = render_preview(&matrix, &StyleConfig::default()).unwrap();
        let circle =
            render_preview(&matrix, &StyleConfig::default().shape(ModuleShape::Circle)).unwrap();
        assert_eq!(square.dimensions(), circle.dimensions());
        let fg = image::Rgb([0u8, 0, 0]);
        assert!(count_pixels(&circle, fg) < count_pixels(&square, fg));
    }

    #[test]
    fn test_custom_colors_replace_defaults() {
        let matrix = encode::encode("colors", EcLevel::M).unwrap();
        let style = StyleConfig::default()
            .foreground(Color::new(0, 0, 128))
            .background(Color::new(255, 255, 0));
        let image = render_preview(&matrix, &style).unwrap();
        assert!(count_pixels(&image, image::Rgb([0, 0, 128])) > 0);
        assert!(count_pixels(&image, image::Rgb([255, 255, 0])) > 0);
        assert_eq!(count_pixels(&image, image::Rgb([0, 0, 0])), 0);
        assert_eq!(count_pixels(&image, image::Rgb([255, 255, 255])), 0);
    }

    #[test]
    fn test_zero_module_size_is_invalid() {
        let matrix = encode::encode("zero", EcLevel::M).unwrap();
        let err = render(&matrix, &StyleConfig::default(), 0, 4).unwrap_err();
        assert!(matches!(err, SelloError::InvalidStyle(_)));
    }

    #[test]
    fn test_finder_pattern_rendered_dark() {
        let matrix = encode::encode("finder", EcLevel::M).unwrap();
        let image = render_preview(&matrix, &StyleConfig::default()).unwrap();
        // Center of module (0, 0), offset past the quiet zone.
        let px = QUIET_ZONE_MODULES * PREVIEW_MODULE_PX + PREVIEW_MODULE_PX / 2;
        assert_eq!(*image.get_pixel(px, px), image::Rgb([0, 0, 0]));
    }
}
