use crate::foundation::core::{Rect, Rgba8};
use crate::render::surface::DrawSurface;

/// Side length of one checker square, in pixels.
pub const CHECKER_PX: f64 = 8.0;
pub const CHECKER_LIGHT: Rgba8 = Rgba8::opaque(0xEE, 0xEE, 0xEE);
pub const CHECKER_DARK: Rgba8 = Rgba8::opaque(0xCC, 0xCC, 0xCC);

/// Checkerboard the parts of the visible range `[start_px, end_px]` that the covered range
/// `[left_px, right_px]` does not reach.
pub fn checkerboard_except<S: DrawSurface + ?Sized>(
    surface: &mut S,
    height_px: f64,
    start_px: f64,
    end_px: f64,
    left_px: f64,
    right_px: f64,
) {
    // No overlap at all: everything visible is uncovered.
    if right_px <= start_px || left_px >= end_px {
        surface.checkerboard(start_px, end_px, height_px);
        return;
    }
    if left_px > start_px {
        surface.checkerboard(start_px, left_px, height_px);
    }
    if end_px > right_px {
        surface.checkerboard(right_px, end_px, height_px);
    }
}

/// Rasterise a checkerboard with [`DrawSurface::fill_rect`].
///
/// Squares are anchored to the absolute pixel grid so the pattern stays put while the uncovered
/// range moves during a pan.
pub(crate) fn paint_checkerboard<S: DrawSurface + ?Sized>(
    surface: &mut S,
    left_px: f64,
    right_px: f64,
    height_px: f64,
) {
    if right_px <= left_px || height_px <= 0.0 {
        return;
    }

    surface.set_fill(CHECKER_LIGHT);
    surface.fill_rect(Rect::new(left_px, 0.0, right_px, height_px));

    surface.set_fill(CHECKER_DARK);
    let first_col = (left_px / CHECKER_PX).floor() as i64;
    let last_col = (right_px / CHECKER_PX).ceil() as i64;
    let rows = (height_px / CHECKER_PX).ceil() as i64;
    for row in 0..rows {
        let y0 = row as f64 * CHECKER_PX;
        let y1 = (y0 + CHECKER_PX).min(height_px);
        for col in first_col..last_col {
            if (row + col).rem_euclid(2) != 0 {
                continue;
            }
            let x0 = (col as f64 * CHECKER_PX).max(left_px);
            let x1 = ((col + 1) as f64 * CHECKER_PX).min(right_px);
            if x1 > x0 {
                surface.fill_rect(Rect::new(x0, y0, x1, y1));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/checkerboard.rs"]
mod tests;
