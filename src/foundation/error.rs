/// Convenience result type used across the crate.
pub type TrackResult<T> = Result<T, TrackError>;

/// Top-level error taxonomy for fallible track APIs.
///
/// The per-frame paint path never returns these; it degrades silently on malformed data. Errors
/// surface only at construction, configuration and transport edges.
#[derive(thiserror::Error, Debug)]
pub enum TrackError {
    /// Invalid snapshot, viewport or surface parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid track configuration or registry misuse.
    #[error("config error: {0}")]
    Config(String),

    /// The outbound fetch transport rejected a request.
    #[error("transport error: {0}")]
    Transport(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrackError {
    /// Build a [`TrackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrackError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TrackError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`TrackError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
