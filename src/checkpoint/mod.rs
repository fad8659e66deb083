//! Serializable snapshots of a state graph.
//!
//! A snapshot captures payloads, activity flags, topology and the driver's
//! transition log. Triggerers and hooks are closures and are not captured,
//! so a snapshot is a record for inspection and persistence; it is never
//! applied back onto a live graph.

use crate::core::{StateGraph, StateId, StateValue, TransitionLog};
use crate::driver::TickDriver;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Captured state of one node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct NodeSnapshot<T: StateValue> {
    /// Handle of the node in its graph
    pub id: StateId,

    /// Label name, as reported by [`StateValue::name`]
    pub name: String,

    /// Payload
    pub value: T,

    /// Whether the node was active
    pub active: bool,

    /// Whether the node self-deactivates
    pub self_deactivates: bool,

    /// Outbound edges in insertion order
    pub neighbors: Vec<StateId>,
}

/// Serializable snapshot of a graph and, optionally, its driver.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Snapshot<T: StateValue> {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Completed ticks of the driver, zero for a bare graph
    pub tick: u64,

    /// Driver's current state
    pub current: Option<StateId>,

    /// Every node in handle order
    pub nodes: Vec<NodeSnapshot<T>>,

    /// Driver's transition log
    pub history: TransitionLog,
}

impl<T: StateValue> Snapshot<T> {
    /// Capture a bare graph.
    pub fn from_graph(graph: &StateGraph<T>) -> Self {
        let nodes = graph
            .iter()
            .map(|(id, node)| NodeSnapshot {
                id,
                name: node.value().name().to_string(),
                value: node.value().clone(),
                active: node.is_active(),
                self_deactivates: node.self_deactivates(),
                neighbors: node.neighbors().to_vec(),
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            tick: 0,
            current: None,
            nodes,
            history: TransitionLog::new(),
        }
    }

    /// Capture a driver together with its graph.
    pub fn from_driver(driver: &TickDriver<T>) -> Self {
        Self {
            tick: driver.ticks(),
            current: driver.current(),
            history: driver.history().clone(),
            ..Self::from_graph(driver.graph())
        }
    }

    /// Look up a captured node.
    pub fn node(&self, id: StateId) -> Option<&NodeSnapshot<T>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Handles of the nodes that were active.
    pub fn active_states(&self) -> Vec<StateId> {
        self.nodes
            .iter()
            .filter(|n| n.active)
            .map(|n| n.id)
            .collect()
    }

    /// Encode as pretty JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode, rejecting unsupported versions.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, CheckpointError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
