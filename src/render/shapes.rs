//! Per-pixel coverage tests for module shapes.
//!
//! Each dark module is rasterized cell-locally: for a module cell of
//! `module_px` pixels, [`covers`] decides whether pixel `(x, y)` inside the
//! cell takes the foreground color. Square fills the cell, circle inscribes
//! the cell, and rounded keeps a corner square exactly when a dark neighbor
//! touches one of its two sides, so runs of modules read as capsules and
//! isolated modules as dots.
//!
//! All tests are pixel-center against an analytic curve; no anti-aliasing,
//! no randomness, byte-identical output for identical input.

use crate::encode::ModuleMatrix;
use crate::style::ModuleShape;

/// Dark-neighbor flags around a module, used by the rounded shape to decide
/// which corners stay square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Neighbors {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl Neighbors {
    /// Read the four orthogonal neighbors of `(x, y)`; out-of-range
    /// neighbors are light.
    pub(crate) fn around(matrix: &ModuleMatrix, x: i32, y: i32) -> Self {
        Self {
            north: matrix.is_dark(x, y - 1),
            south: matrix.is_dark(x, y + 1),
            east: matrix.is_dark(x + 1, y),
            west: matrix.is_dark(x - 1, y),
        }
    }
}

/// Whether pixel `(x, y)` of a `module_px`-sized cell is covered by `shape`.
pub(crate) fn covers(
    shape: ModuleShape,
    neighbors: Neighbors,
    x: u32,
    y: u32,
    module_px: u32,
) -> bool {
    match shape {
        ModuleShape::Square => true,
        ModuleShape::Circle => in_circle(x, y, module_px),
        ModuleShape::Rounded => in_rounded(x, y, module_px, neighbors),
    }
}

fn in_circle(x: u32, y: u32, module_px: u32) -> bool {
    let r = module_px as f32 / 2.0;
    let dx = x as f32 + 0.5 - r;
    let dy = y as f32 + 0.5 - r;
    dx * dx + dy * dy <= r * r
}

fn in_rounded(x: u32, y: u32, module_px: u32, n: Neighbors) -> bool {
    let w = module_px as f32;
    let r = w / 2.0;
    let fx = x as f32 + 0.5;
    let fy = y as f32 + 0.5;

    // Locate the corner square the pixel falls in, if any. A corner is
    // rounded only when both of its adjacent neighbors are light; the arc
    // center sits `r` in from both edges.
    let arc_center = if fx < r && fy < r {
        (!n.north && !n.west).then_some((r, r))
    } else if fx > w - r && fy < r {
        (!n.north && !n.east).then_some((w - r, r))
    } else if fx < r && fy > w - r {
        (!n.south && !n.west).then_some((r, w - r))
    } else if fx > w - r && fy > w - r {
        (!n.south && !n.east).then_some((w - r, w - r))
    } else {
        return true;
    };

    match arc_center {
        None => true,
        Some((cx, cy)) => {
            let dx = fx - cx;
            let dy = fy - cy;
            dx * dx + dy * dy <= r * r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: u32 = 10;

    fn mask(shape: ModuleShape, n: Neighbors) -> Vec<bool> {
        let mut out = Vec::with_capacity((M * M) as usize);
        for y in 0..M {
            for x in 0..M {
                out.push(covers(shape, n, x, y, M));
            }
        }
        out
    }

    #[test]
    fn test_square_fills_cell() {
        assert!(mask(ModuleShape::Square, Neighbors::default()).iter().all(|c| *c));
    }

    #[test]
    fn test_circle_clips_corners_keeps_center() {
        let n = Neighbors::default();
        assert!(!covers(ModuleShape::Circle, n, 0, 0, M));
        assert!(!covers(ModuleShape::Circle, n, M - 1, M - 1, M));
        assert!(covers(ModuleShape::Circle, n, M / 2, M / 2, M));
    }

    #[test]
    fn test_isolated_rounded_module_is_a_dot() {
        // With no dark neighbors all four corners round away and the cell
        // degenerates to the inscribed circle.
        assert_eq!(
            mask(ModuleShape::Rounded, Neighbors::default()),
            mask(ModuleShape::Circle, Neighbors::default())
        );
    }

    #[test]
    fn test_fully_surrounded_rounded_module_is_square() {
        let n = Neighbors { north: true, south: true, east: true, west: true };
        assert_eq!(mask(ModuleShape::Rounded, n), mask(ModuleShape::Square, n));
    }

    #[test]
    fn test_rounded_run_keeps_joined_side_square() {
        // Dark neighbor to the east: both east corners stay square, both
        // west corners round.
        let n = Neighbors { east: true, ..Neighbors::default() };
        assert!(covers(ModuleShape::Rounded, n, M - 1, 0, M));
        assert!(covers(ModuleShape::Rounded, n, M - 1, M - 1, M));
        assert!(!covers(ModuleShape::Rounded, n, 0, 0, M));
        assert!(!covers(ModuleShape::Rounded, n, 0, M - 1, M));
    }

    #[test]
    fn test_one_pixel_module_always_covered() {
        let n = Neighbors::default();
        for shape in crate::style::ModuleShape::all() {
            assert!(covers(shape, n, 0, 0, 1));
        }
    }
}
