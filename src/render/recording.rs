use crate::foundation::core::{Rect, Rgba8};
use crate::render::surface::DrawSurface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    SetFill(Rgba8),
    FillRect(Rect),
    Checkerboard {
        left_px: f64,
        right_px: f64,
        height_px: f64,
    },
}

/// Surface that records calls instead of rasterising them.
///
/// Checkerboards are kept as a single command rather than expanded into squares.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    /// Rectangles filled with `color`, in call order.
    pub fn rects_with(&self, color: Rgba8) -> Vec<Rect> {
        let mut current = None;
        let mut out = Vec::new();
        for cmd in &self.cmds {
            match cmd {
                DrawCmd::SetFill(c) => current = Some(*c),
                DrawCmd::FillRect(r) if current == Some(color) => out.push(*r),
                DrawCmd::FillRect(_) => {}
                // Leaves the fill color unspecified.
                DrawCmd::Checkerboard { .. } => current = None,
            }
        }
        out
    }

    /// `(left_px, right_px)` of every recorded checkerboard.
    pub fn checkerboards(&self) -> Vec<(f64, f64)> {
        self.cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Checkerboard {
                    left_px, right_px, ..
                } => Some((*left_px, *right_px)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn set_fill(&mut self, color: Rgba8) {
        self.cmds.push(DrawCmd::SetFill(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.cmds.push(DrawCmd::FillRect(rect));
    }

    fn checkerboard(&mut self, left_px: f64, right_px: f64, height_px: f64) {
        self.cmds.push(DrawCmd::Checkerboard {
            left_px,
            right_px,
            height_px,
        });
    }
}
