use crate::foundation::core::TimeSpan;
use crate::timeline::scale::TimeScale;

/// Per-frame view of the timeline: the visible window plus its pixel transform.
///
/// Built fresh for every render; tracks never keep one across frames.
#[derive(Clone, Copy)]
pub struct Viewport<'a> {
    /// Visible time window.
    pub window: TimeSpan,
    /// Time <-> pixel transform for this frame.
    pub scale: &'a dyn TimeScale,
}

impl<'a> Viewport<'a> {
    pub fn new(window: TimeSpan, scale: &'a dyn TimeScale) -> Self {
        Self { window, scale }
    }

    /// Pixel coordinates of the visible window's edges.
    pub fn visible_px(&self) -> (f64, f64) {
        (
            self.scale.time_to_px(self.window.start),
            self.scale.time_to_px(self.window.end),
        )
    }
}

impl std::fmt::Debug for Viewport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}
