//! Graph error types.

use thiserror::Error;

/// Errors returned by [`StateGraph`](super::StateGraph) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was not issued by this graph.
    #[error("unknown state #{index} (graph holds {len} states)")]
    UnknownState { index: usize, len: usize },
}
