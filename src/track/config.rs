use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::foundation::core::{Rgba8, TrackId};
use crate::foundation::error::{TrackError, TrackResult};
use crate::track::fetch::DEFAULT_DEBOUNCE;

/// Registry-owned descriptor of one track instance.
///
/// `config` is kind-specific and parsed by the track's factory.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TrackState {
    pub id: TrackId,
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub config: serde_json::Value,
}

impl TrackState {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: TrackId(id.into()),
            kind: kind.into(),
            name: String::new(),
            config: serde_json::Value::Null,
        }
    }

    /// Parse a track state from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrackResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| TrackError::serde(format!("parse track state JSON: {e}")))
    }

    /// Parse a track state from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TrackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TrackError::config(format!("open track state JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Geometry and colors of a vsync lane, in pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VsyncStyle {
    pub margin_top: f64,
    pub rect_height: f64,
    /// Height of the lane; the checkerboard covers all of it.
    pub track_height: f64,
    pub background: Rgba8,
    pub foreground: Rgba8,
    /// Intervals this wide or narrower (in px) are culled.
    pub min_bar_width_px: f64,
}

impl Default for VsyncStyle {
    fn default() -> Self {
        Self {
            margin_top: 5.0,
            rect_height: 30.0,
            track_height: 40.0,
            background: Rgba8::opaque(0x5E, 0x90, 0x9B),
            foreground: Rgba8::opaque(0x32, 0x3D, 0x48),
            min_bar_width_px: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub debounce_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
        }
    }
}

impl FetchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Per-track settings for the vsync kind.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VsyncConfig {
    pub style: VsyncStyle,
    pub fetch: FetchConfig,
}

impl VsyncConfig {
    /// Parse `state.config`; `null` yields the defaults.
    pub fn from_track_state(state: &TrackState) -> TrackResult<Self> {
        let cfg: Self = if state.config.is_null() {
            Self::default()
        } else {
            serde_json::from_value(state.config.clone()).map_err(|e| {
                TrackError::config(format!("track '{}': invalid vsync config: {e}", state.id))
            })?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TrackResult<()> {
        let s = &self.style;
        for (name, v) in [
            ("margin_top", s.margin_top),
            ("rect_height", s.rect_height),
            ("track_height", s.track_height),
            ("min_bar_width_px", s.min_bar_width_px),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(TrackError::config(format!(
                    "style.{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/config.rs"]
mod tests;
