//! A single timeline lane that draws vsync intervals.
//!
//! The track turns a time-windowed, resolution-bucketed snapshot of paired vsync edges into
//! pixels, and keeps that snapshot in step with the viewport without blocking the render loop.
//!
//! # Per-frame flow
//!
//! 1. **Check**: [`FetchScheduler::maybe_refresh`] compares the cached [`VsyncData`] with the
//!    [`Viewport`] and the quantized resolution ([`quantize_resolution`]). When stale, one
//!    request is scheduled; further stale frames coalesce into it.
//! 2. **Paint**: [`paint_vsyncs`] draws a checkerboard over uncovered pixels, the covered
//!    background, and one bar per visible interval into any [`DrawSurface`].
//! 3. **Issue**: once the debounce has elapsed, [`VsyncTrack::tick`] builds a [`FetchRequest`]
//!    for the viewport as it is then and hands it to a [`FetchSink`].
//!
//! Time is passed in explicitly, so the whole pipeline runs against a virtual clock in tests.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO on the paint path**: snapshots arrive through the host; painting never fails.
#![forbid(unsafe_code)]

mod foundation;
mod render;
mod timeline;
mod track;

pub use crate::foundation::core::{Point, Rect, Rgba8, TimeSpan, TrackId};
pub use crate::foundation::error::{TrackError, TrackResult};

pub use crate::render::checkerboard::{CHECKER_DARK, CHECKER_LIGHT, CHECKER_PX, checkerboard_except};
pub use crate::render::cpu::{CpuSurface, FrameRGBA};
pub use crate::render::recording::{DrawCmd, RecordingSurface};
pub use crate::render::surface::DrawSurface;

pub use crate::timeline::scale::{LinearTimeScale, TimeScale};
pub use crate::timeline::viewport::Viewport;

pub use crate::track::config::{FetchConfig, TrackState, VsyncConfig, VsyncStyle};
pub use crate::track::data::{TrackData, VsyncData};
pub use crate::track::fetch::{
    DEFAULT_DEBOUNCE, FetchRequest, FetchScheduler, FetchSink, FetchState, PendingFetch, Refresh,
    is_stale, padded_window,
};
pub use crate::track::registry::{Track, TrackFactory, TrackRegistry};
pub use crate::track::resolution::{current_resolution, quantize_resolution};
pub use crate::track::vsync::{FrameStats, KIND as VSYNC_KIND, PaintStats, VsyncTrack, paint_vsyncs};
