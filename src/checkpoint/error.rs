//! Snapshot encoding errors.

use thiserror::Error;

/// Errors raised while encoding or decoding a [`Snapshot`](super::Snapshot).
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("snapshot JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),

    /// The snapshot was written by a different format version.
    #[error("snapshot format version {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
