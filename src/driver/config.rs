//! Driver configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use super::error::DriverError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Order of the two per-tick calls a [`TickDriver`](super::TickDriver) makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickOrder {
    /// Run the current state, then probe its neighbors. A state entered on
    /// this tick first runs its action on the next tick.
    #[default]
    UpdateThenProbe,
    /// Probe the neighbors first, then run whichever state is current. A
    /// state entered on this tick runs its action on the same tick.
    ProbeThenUpdate,
}

/// Tick driver configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Call order within a tick.
    pub order: TickOrder,
    /// Whether changes of the current state are logged.
    pub record_history: bool,
    /// Maximum retained transition records. `None` keeps everything.
    pub history_capacity: Option<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            order: TickOrder::default(),
            record_history: true,
            history_capacity: Some(1024),
        }
    }
}

impl DriverConfig {
    /// Parse a config from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, DriverError> {
        let config: DriverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DriverError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, DriverError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject contradictory settings.
    pub fn validate(&self) -> Result<(), DriverError> {
        if self.record_history && self.history_capacity == Some(0) {
            return Err(DriverError::InvalidConfig {
                reason: "history_capacity must be non-zero when record_history is set".to_string(),
            });
        }
        Ok(())
    }
}
