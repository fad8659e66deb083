//! Driver error types.

use crate::core::GraphError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or running a [`TickDriver`](super::TickDriver).
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("invalid driver config: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse driver config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
