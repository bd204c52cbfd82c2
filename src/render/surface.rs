use crate::foundation::core::{Rect, Rgba8};
use crate::render::checkerboard::paint_checkerboard;

/// Minimal 2D drawing capability a track paints into.
///
/// Modelled after an immediate-mode canvas: a current fill color plus axis-aligned rectangle
/// fills. Rectangles may have zero or negative width; implementations must accept them without
/// panicking (raster surfaces paint nothing for them).
pub trait DrawSurface {
    /// Set the color used by subsequent fills.
    fn set_fill(&mut self, color: Rgba8);

    /// Fill an axis-aligned rectangle in pixel coordinates.
    fn fill_rect(&mut self, rect: Rect);

    /// Paint the "no data yet" placeholder over `[left_px, right_px]` for the full track height.
    ///
    /// Leaves the current fill color unspecified.
    fn checkerboard(&mut self, left_px: f64, right_px: f64, height_px: f64) {
        paint_checkerboard(self, left_px, right_px, height_px);
    }
}
