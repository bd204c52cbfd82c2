use std::time::Duration;

use crate::foundation::core::{TimeSpan, TrackId};
use crate::foundation::error::{TrackError, TrackResult};
use crate::timeline::viewport::Viewport;
use crate::track::data::VsyncData;
use crate::track::resolution::current_resolution;

/// Delay between detecting staleness and issuing the request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(50);

/// Outbound request for fresh track data.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub track_id: TrackId,
    pub start: f64,
    pub end: f64,
    pub resolution: f64,
}

/// Fire-and-forget transport that eventually publishes a new snapshot for the track.
pub trait FetchSink {
    fn send(&mut self, request: FetchRequest) -> TrackResult<()>;
}

impl FetchSink for Vec<FetchRequest> {
    fn send(&mut self, request: FetchRequest) -> TrackResult<()> {
        self.push(request);
        Ok(())
    }
}

impl FetchSink for std::sync::mpsc::Sender<FetchRequest> {
    fn send(&mut self, request: FetchRequest) -> TrackResult<()> {
        std::sync::mpsc::Sender::send(self, request)
            .map_err(|_| TrackError::transport("fetch receiver disconnected"))
    }
}

/// A fetch waiting out its debounce delay.
///
/// Only the deadline is recorded; the request window is read from the viewport when it fires.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFetch {
    pub due_at: Duration,
    pub track_id: TrackId,
}

/// Scheduler state. `Scheduled` is the "fetch in flight" flag.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState {
    /// Nothing has been issued yet, or the last send failed.
    #[default]
    Idle,
    Scheduled(PendingFetch),
    /// The last request reached the sink; its answer may still be outstanding.
    Issued(FetchRequest),
}

/// What a staleness check did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Refresh {
    /// The snapshot covers the viewport at the current resolution.
    Fresh,
    /// Stale; a new request was scheduled.
    Scheduled,
    /// Stale, but a request is already pending.
    Coalesced,
}

/// True when `data` cannot serve `viewport`: missing, not covering the visible window, or
/// fetched at another quantized resolution.
pub fn is_stale(data: Option<&VsyncData>, viewport: &Viewport<'_>) -> bool {
    let Some(data) = data else {
        return true;
    };
    !data.span().contains_span(viewport.window)
        || data.resolution != current_resolution(viewport.scale)
}

/// Request window: one visible duration of slack on each side.
pub fn padded_window(window: TimeSpan) -> TimeSpan {
    window.padded(window.duration())
}

/// Debounced, single-flight data refresh for one track.
///
/// Time is passed in explicitly (`now`, measured from any fixed origin), so hosts drive it from
/// a real clock and tests from a virtual one.
#[derive(Clone, Debug)]
pub struct FetchScheduler {
    debounce: Duration,
    state: FetchState,
}

impl Default for FetchScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl FetchScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            state: FetchState::Idle,
        }
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn in_flight(&self) -> bool {
        matches!(self.state, FetchState::Scheduled(_))
    }

    /// Staleness check run once per frame. O(1); never blocks.
    pub fn maybe_refresh(
        &mut self,
        track_id: &TrackId,
        data: Option<&VsyncData>,
        viewport: &Viewport<'_>,
        now: Duration,
    ) -> Refresh {
        if !is_stale(data, viewport) {
            return Refresh::Fresh;
        }
        if self.in_flight() {
            return Refresh::Coalesced;
        }

        let due_at = now.saturating_add(self.debounce);
        tracing::debug!(track = %track_id, ?due_at, "scheduled vsync fetch");
        self.state = FetchState::Scheduled(PendingFetch {
            due_at,
            track_id: track_id.clone(),
        });
        Refresh::Scheduled
    }

    /// Issue the pending request once its debounce has elapsed.
    ///
    /// The request covers `viewport` as it is now, padded by one window on each side, at the
    /// current resolution. The in-flight flag clears before the sink is called, so a failing
    /// sink does not wedge the scheduler; the next stale frame schedules again.
    pub fn poll(
        &mut self,
        now: Duration,
        viewport: &Viewport<'_>,
        sink: &mut dyn FetchSink,
    ) -> TrackResult<Option<FetchRequest>> {
        let due = matches!(&self.state, FetchState::Scheduled(p) if now >= p.due_at);
        if !due {
            return Ok(None);
        }
        let FetchState::Scheduled(pending) = std::mem::take(&mut self.state) else {
            return Ok(None);
        };

        let window = padded_window(viewport.window);
        let request = FetchRequest {
            track_id: pending.track_id,
            start: window.start,
            end: window.end,
            resolution: current_resolution(viewport.scale),
        };
        tracing::debug!(
            track = %request.track_id,
            start = request.start,
            end = request.end,
            resolution = request.resolution,
            "issuing vsync fetch"
        );
        sink.send(request.clone())?;
        self.state = FetchState::Issued(request.clone());
        Ok(Some(request))
    }

    /// Last request that reached the sink, if the scheduler has not rescheduled since.
    pub fn last_issued(&self) -> Option<&FetchRequest> {
        match &self.state {
            FetchState::Issued(request) => Some(request),
            _ => None,
        }
    }

    /// Drop a pending request without issuing it.
    pub fn cancel(&mut self) -> Option<PendingFetch> {
        match std::mem::take(&mut self.state) {
            FetchState::Scheduled(p) => Some(p),
            other => {
                self.state = other;
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/fetch.rs"]
mod tests;
