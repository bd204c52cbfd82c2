use std::time::Duration;

use crate::foundation::core::{Rect, TrackId};
use crate::foundation::error::TrackResult;
use crate::render::checkerboard::checkerboard_except;
use crate::render::surface::DrawSurface;
use crate::timeline::viewport::Viewport;
use crate::track::config::{TrackState, VsyncConfig, VsyncStyle};
use crate::track::data::{TrackData, VsyncData};
use crate::track::fetch::{FetchRequest, FetchScheduler, FetchSink, Refresh};
use crate::track::registry::{Track, TrackRegistry};

/// Registry tag of the vsync track kind.
pub const KIND: &str = "VsyncTrack";

/// Counters from painting one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Pairs examined before the walk finished or stopped early.
    pub pairs_visited: usize,
    /// Pairs ending left of the drawable range.
    pub skipped_before: usize,
    /// Pairs too narrow to draw.
    pub culled_subpixel: usize,
    pub bars_painted: usize,
}

/// What one [`VsyncTrack::render`] call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameStats {
    pub refresh: Refresh,
    /// `None` when there was no snapshot to draw.
    pub paint: Option<PaintStats>,
}

/// Paint `data` into the lane described by `style`.
///
/// Order: checkerboard over uncovered visible pixels, background over the covered part, then
/// one foreground bar per visible `(left, right)` pair. Never fails; an empty or inverted covered
/// range produces a degenerate background fill and no bars.
pub fn paint_vsyncs(
    surface: &mut dyn DrawSurface,
    data: &VsyncData,
    viewport: &Viewport<'_>,
    style: &VsyncStyle,
) -> PaintStats {
    let scale = viewport.scale;
    let data_start_px = scale.time_to_px(data.start);
    let data_end_px = scale.time_to_px(data.end);
    let (visible_start_px, visible_end_px) = viewport.visible_px();

    checkerboard_except(
        surface,
        style.track_height,
        visible_start_px,
        visible_end_px,
        data_start_px,
        data_end_px,
    );

    let start_px = data_start_px.max(visible_start_px).floor();
    let end_px = data_end_px.min(visible_end_px).floor();

    surface.set_fill(style.background);
    surface.fill_rect(band(start_px, end_px, style));

    surface.set_fill(style.foreground);
    let mut stats = PaintStats::default();
    for (left, right) in data.pairs() {
        stats.pairs_visited += 1;
        let left_px = scale.time_to_px(left).floor();
        let right_px = scale.time_to_px(right).floor();
        if right_px < start_px {
            stats.skipped_before += 1;
            continue;
        }
        if right_px - left_px <= style.min_bar_width_px {
            stats.culled_subpixel += 1;
            continue;
        }
        // Pairs are sorted, so everything after this one is off to the right too.
        if left_px > end_px {
            break;
        }
        surface.fill_rect(band(left_px.max(start_px), right_px.min(end_px), style));
        stats.bars_painted += 1;
    }
    stats
}

fn band(x0: f64, x1: f64, style: &VsyncStyle) -> Rect {
    Rect::new(x0, style.margin_top, x1, style.margin_top + style.rect_height)
}

/// Timeline lane that draws vsync intervals and keeps its snapshot in step with the viewport.
#[derive(Clone, Debug)]
pub struct VsyncTrack {
    id: TrackId,
    name: String,
    config: VsyncConfig,
    scheduler: FetchScheduler,
}

impl VsyncTrack {
    pub fn new(id: TrackId, config: VsyncConfig) -> Self {
        let scheduler = FetchScheduler::new(config.fetch.debounce());
        Self {
            id,
            name: String::new(),
            config,
            scheduler,
        }
    }

    /// Build a track from its registry entry.
    pub fn create(state: &TrackState) -> TrackResult<Self> {
        let config = VsyncConfig::from_track_state(state)?;
        let mut track = Self::new(state.id.clone(), config);
        track.name = state.name.clone();
        Ok(track)
    }

    /// Register this kind under [`KIND`].
    pub fn register(registry: &mut TrackRegistry) -> TrackResult<()> {
        registry.register(KIND, create_boxed)
    }

    pub fn id(&self) -> &TrackId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &VsyncConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &FetchScheduler {
        &self.scheduler
    }

    /// Per-frame entry point: check staleness (possibly scheduling a fetch), then paint
    /// whatever snapshot is currently cached.
    #[tracing::instrument(level = "trace", skip_all, fields(track = %self.id))]
    pub fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        data: Option<&VsyncData>,
        viewport: &Viewport<'_>,
        now: Duration,
    ) -> FrameStats {
        let refresh = self.scheduler.maybe_refresh(&self.id, data, viewport, now);
        let paint = data.map(|d| paint_vsyncs(surface, d, viewport, &self.config.style));
        FrameStats { refresh, paint }
    }

    /// Issue the pending fetch for the current `viewport` if its debounce has elapsed.
    pub fn tick(
        &mut self,
        now: Duration,
        viewport: &Viewport<'_>,
        sink: &mut dyn FetchSink,
    ) -> TrackResult<Option<FetchRequest>> {
        self.scheduler.poll(now, viewport, sink).inspect_err(|e| {
            tracing::warn!(track = %self.id, error = %e, "vsync fetch was not delivered");
        })
    }

    /// Drop a pending fetch, e.g. when the track is removed.
    pub fn cancel_fetch(&mut self) -> bool {
        self.scheduler.cancel().is_some()
    }
}

fn create_boxed(state: &TrackState) -> TrackResult<Box<dyn Track>> {
    Ok(Box::new(VsyncTrack::create(state)?))
}

impl Track for VsyncTrack {
    fn id(&self) -> &TrackId {
        &self.id
    }

    fn kind(&self) -> &'static str {
        KIND
    }

    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        data: Option<&TrackData>,
        viewport: &Viewport<'_>,
        now: Duration,
    ) -> FrameStats {
        let data = data.and_then(TrackData::as_vsync);
        VsyncTrack::render(self, surface, data, viewport, now)
    }

    fn tick(
        &mut self,
        now: Duration,
        viewport: &Viewport<'_>,
        sink: &mut dyn FetchSink,
    ) -> TrackResult<Option<FetchRequest>> {
        VsyncTrack::tick(self, now, viewport, sink)
    }

    fn in_flight(&self) -> bool {
        self.scheduler.in_flight()
    }

    fn cancel_fetch(&mut self) -> bool {
        VsyncTrack::cancel_fetch(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/vsync.rs"]
mod tests;
