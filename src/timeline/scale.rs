use crate::foundation::core::TimeSpan;
use crate::foundation::error::{TrackError, TrackResult};

/// Time <-> pixel mapping supplied by the timeline for the current frame.
///
/// Both methods are pure; tracks call them many times per frame.
pub trait TimeScale {
    /// Map an absolute time (seconds) to a horizontal pixel coordinate.
    fn time_to_px(&self, time: f64) -> f64;

    /// Map a pixel distance to the time duration it represents.
    fn delta_px_to_duration(&self, px: f64) -> f64;
}

/// Affine mapping of a time window onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTimeScale {
    window: TimeSpan,
    px_start: f64,
    px_end: f64,
}

impl LinearTimeScale {
    /// `window` is drawn across `[px_start, px_end]`.
    pub fn new(window: TimeSpan, px_start: f64, px_end: f64) -> TrackResult<Self> {
        if !px_start.is_finite() || !px_end.is_finite() {
            return Err(TrackError::validation("pixel range must be finite"));
        }
        if px_end <= px_start {
            return Err(TrackError::validation("pixel range must have positive width"));
        }
        if window.duration() <= 0.0 {
            return Err(TrackError::validation("time window must have positive duration"));
        }
        Ok(Self {
            window,
            px_start,
            px_end,
        })
    }

    pub fn window(&self) -> TimeSpan {
        self.window
    }

    pub fn px_span(&self) -> f64 {
        self.px_end - self.px_start
    }

    pub fn px_to_time(&self, px: f64) -> f64 {
        self.window.start + self.delta_px_to_duration(px - self.px_start)
    }

    /// Pixels per second.
    pub fn px_per_time(&self) -> f64 {
        self.px_span() / self.window.duration()
    }

    pub fn delta_time_to_px(&self, duration: f64) -> f64 {
        duration * self.px_per_time()
    }
}

impl TimeScale for LinearTimeScale {
    fn time_to_px(&self, time: f64) -> f64 {
        self.px_start + self.delta_time_to_px(time - self.window.start)
    }

    fn delta_px_to_duration(&self, px: f64) -> f64 {
        px / self.px_per_time()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scale.rs"]
mod tests;
