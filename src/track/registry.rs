use std::collections::BTreeMap;
use std::time::Duration;

use crate::foundation::core::TrackId;
use crate::foundation::error::{TrackError, TrackResult};
use crate::render::surface::DrawSurface;
use crate::timeline::viewport::Viewport;
use crate::track::config::TrackState;
use crate::track::data::TrackData;
use crate::track::fetch::{FetchRequest, FetchSink};
use crate::track::vsync::{FrameStats, VsyncTrack};

/// Capabilities every registered track kind provides.
pub trait Track {
    fn id(&self) -> &TrackId;

    /// Registry tag this track was created under.
    fn kind(&self) -> &'static str;

    /// Check staleness and paint the latest published data, if any.
    fn render(
        &mut self,
        surface: &mut dyn DrawSurface,
        data: Option<&TrackData>,
        viewport: &Viewport<'_>,
        now: Duration,
    ) -> FrameStats;

    /// Issue a due fetch request for `viewport` to `sink`.
    fn tick(
        &mut self,
        now: Duration,
        viewport: &Viewport<'_>,
        sink: &mut dyn FetchSink,
    ) -> TrackResult<Option<FetchRequest>>;

    fn in_flight(&self) -> bool;

    /// Drop a pending fetch without issuing it. Returns whether one was pending.
    fn cancel_fetch(&mut self) -> bool;
}

/// Builds a track instance from its registry entry.
pub type TrackFactory = fn(&TrackState) -> TrackResult<Box<dyn Track>>;

/// Kind-tag -> factory table.
#[derive(Clone, Debug, Default)]
pub struct TrackRegistry {
    factories: BTreeMap<String, TrackFactory>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every kind shipped by this crate.
    pub fn with_builtin() -> TrackResult<Self> {
        let mut registry = Self::new();
        VsyncTrack::register(&mut registry)?;
        Ok(registry)
    }

    pub fn register(&mut self, kind: &str, factory: TrackFactory) -> TrackResult<()> {
        if self.factories.contains_key(kind) {
            return Err(TrackError::config(format!(
                "track kind '{kind}' is already registered"
            )));
        }
        self.factories.insert(kind.to_owned(), factory);
        Ok(())
    }

    pub fn has(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.keys().map(String::as_str)
    }

    /// Instantiate the track described by `state`.
    pub fn create(&self, state: &TrackState) -> TrackResult<Box<dyn Track>> {
        let factory = self.factories.get(&state.kind).ok_or_else(|| {
            TrackError::config(format!(
                "unknown track kind '{}' for track '{}'",
                state.kind, state.id
            ))
        })?;
        tracing::debug!(track = %state.id, kind = %state.kind, "creating track");
        factory(state)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/registry.rs"]
mod tests;
