//! Display fitting for on-screen previews.
//!
//! A full-resolution render rarely matches the widget it is shown in.
//! [`fit_to_display`] scales it down to the available surface (minus a
//! fixed margin, capped at [`MAX_PREVIEW_PX`]) while never scaling up:
//! a symbol smaller than the surface is displayed at its natural size,
//! since upscaling only blurs module edges.
//!
//! Surfaces that have not been laid out yet report a zero or one pixel
//! size; fitting against those is meaningless, so the fit defers with
//! [`FitOutcome::AwaitLayout`] and the caller retries once layout settles.

use image::RgbImage;
use image::imageops::{self, FilterType};

/// Pixels reserved around the preview inside the display surface.
pub const DISPLAY_MARGIN_PX: u32 = 40;

/// Hard cap on the preview edge length, in pixels.
pub const MAX_PREVIEW_PX: u32 = 400;

/// Outcome of a display fit.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome {
    /// Image sized for display (unchanged when it already fit).
    Ready(RgbImage),
    /// The surface has no usable size yet; retry after layout.
    AwaitLayout,
}

/// Fit an image into a display surface of `avail_w` by `avail_h` pixels.
///
/// The target edge is `min(avail_w - margin, avail_h - margin, max_size)`.
/// An image whose larger edge already fits is returned unchanged; anything
/// bigger is downsampled uniformly with Lanczos3, preserving aspect ratio.
/// Fitting an already-fitted image is a no-op, so re-fits are safe.
pub fn fit_to_display(
    image: &RgbImage,
    avail_w: u32,
    avail_h: u32,
    max_size: u32,
) -> FitOutcome {
    if avail_w <= 1 || avail_h <= 1 {
        return FitOutcome::AwaitLayout;
    }

    let target = avail_w
        .saturating_sub(DISPLAY_MARGIN_PX)
        .min(avail_h.saturating_sub(DISPLAY_MARGIN_PX))
        .min(max_size);
    if target == 0 {
        return FitOutcome::AwaitLayout;
    }

    let largest = image.width().max(image.height());
    if largest <= target {
        return FitOutcome::Ready(image.clone());
    }

    // Uniform scale: the larger edge lands exactly on the target.
    let scale = target as f32 / largest as f32;
    let w = ((image.width() as f32 * scale).round() as u32).max(1);
    let h = ((image.height() as f32 * scale).round() as u32).max(1);
    FitOutcome::Ready(imageops::resize(image, w, h, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb([30, 60, 90]))
    }

    fn fitted(outcome: FitOutcome) -> RgbImage {
        match outcome {
            FitOutcome::Ready(img) => img,
            FitOutcome::AwaitLayout => panic!("expected a fitted image"),
        }
    }

    #[test]
    fn test_small_image_passes_through() {
        let image = solid(200, 200);
        let out = fitted(fit_to_display(&image, 800, 600, MAX_PREVIEW_PX));
        assert_eq!(out.as_raw(), image.as_raw());
    }

    #[test]
    fn test_large_image_hits_cap() {
        let image = solid(660, 660);
        let out = fitted(fit_to_display(&image, 800, 600, MAX_PREVIEW_PX));
        assert_eq!(out.dimensions(), (400, 400));
    }

    #[test]
    fn test_margin_shrinks_target() {
        // 330 - 40 = 290 available on the narrow axis.
        let image = solid(660, 660);
        let out = fitted(fit_to_display(&image, 330, 600, MAX_PREVIEW_PX));
        assert_eq!(out.dimensions(), (290, 290));
    }

    #[test]
    fn test_aspect_ratio_preserved() {
        let image = solid(800, 400);
        let out = fitted(fit_to_display(&image, 440, 440, MAX_PREVIEW_PX));
        assert_eq!(out.dimensions(), (400, 200));
    }

    #[test]
    fn test_fit_is_idempotent() {
        let image = solid(660, 660);
        let once = fitted(fit_to_display(&image, 500, 500, MAX_PREVIEW_PX));
        let twice = fitted(fit_to_display(&once, 500, 500, MAX_PREVIEW_PX));
        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn test_zero_surface_defers() {
        let image = solid(100, 100);
        assert_eq!(fit_to_display(&image, 0, 0, MAX_PREVIEW_PX), FitOutcome::AwaitLayout);
        assert_eq!(fit_to_display(&image, 1, 600, MAX_PREVIEW_PX), FitOutcome::AwaitLayout);
    }

    #[test]
    fn test_surface_smaller_than_margin_defers() {
        let image = solid(100, 100);
        assert_eq!(fit_to_display(&image, 30, 600, MAX_PREVIEW_PX), FitOutcome::AwaitLayout);
    }
}
