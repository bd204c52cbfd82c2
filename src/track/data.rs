use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::TimeSpan;
use crate::foundation::error::{TrackError, TrackResult};

/// Immutable slice of vsync data covering `[start, end]` at one quantized resolution.
///
/// `vsyncs` holds consecutive `(left, right)` edge pairs sorted by time. An odd trailing
/// timestamp is tolerated and ignored by [`VsyncData::pairs`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VsyncData {
    pub start: f64,
    pub end: f64,
    pub resolution: f64,
    pub vsyncs: Vec<f64>,
}

impl VsyncData {
    pub fn new(start: f64, end: f64, resolution: f64, vsyncs: Vec<f64>) -> TrackResult<Self> {
        let data = Self {
            start,
            end,
            resolution,
            vsyncs,
        };
        data.validate()?;
        Ok(data)
    }

    /// Check the covered range. Edge ordering is trusted, not verified.
    pub fn validate(&self) -> TrackResult<()> {
        TimeSpan::new(self.start, self.end)?;
        if !(self.resolution.is_finite() && self.resolution > 0.0) {
            return Err(TrackError::validation(
                "VsyncData resolution must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Parse a snapshot from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrackResult<Self> {
        let data: Self = serde_json::from_reader(r)
            .map_err(|e| TrackError::serde(format!("parse vsync data JSON: {e}")))?;
        data.validate()?;
        Ok(data)
    }

    /// Parse a snapshot from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> TrackResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            TrackError::validation(format!("open vsync data JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn span(&self) -> TimeSpan {
        TimeSpan {
            start: self.start,
            end: self.end,
        }
    }

    /// `(left, right)` edge pairs in ascending order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.vsyncs.chunks_exact(2).map(|p| (p[0], p[1]))
    }
}

/// Latest data published for a track, tagged by track kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum TrackData {
    Vsync(VsyncData),
}

impl TrackData {
    pub fn as_vsync(&self) -> Option<&VsyncData> {
        match self {
            Self::Vsync(d) => Some(d),
        }
    }
}

impl From<VsyncData> for TrackData {
    fn from(d: VsyncData) -> Self {
        Self::Vsync(d)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/track/data.rs"]
mod tests;
