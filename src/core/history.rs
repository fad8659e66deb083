//! Transition log.
//!
//! Records which state became current on which tick. A log may be bounded,
//! in which case the oldest records are evicted first.

use super::graph::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single change of the current state.
///
/// `from` is `None` when the driver was idle, `to` is `None` when it went
/// idle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was current before the change
    pub from: Option<StateId>,
    /// The state that is current after the change
    pub to: Option<StateId>,
    /// Tick on which the change happened
    pub tick: u64,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded list of [`TransitionRecord`]s.
///
/// # Example
///
/// ```rust
/// use tickstate::core::{StateGraph, TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_state("idle");
/// let attack = graph.add_state("attack");
///
/// let mut log = TransitionLog::bounded(8);
/// log.record(TransitionRecord { from: None, to: Some(idle), tick: 0, timestamp: Utc::now() });
/// log.record(TransitionRecord { from: Some(idle), to: Some(attack), tick: 3, timestamp: Utc::now() });
///
/// assert_eq!(log.get_path(), vec![None, Some(idle), Some(attack)]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: VecDeque<TransitionRecord>,
    capacity: Option<usize>,
}

impl TransitionLog {
    /// Create an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `capacity` records.
    ///
    /// Storage grows with the records actually kept, so a large bound
    /// reserves nothing up front.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            records: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&mut self, record: TransitionRecord) {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while self.records.len() >= capacity {
                self.records.pop_front();
            }
        }
        self.records.push_back(record);
    }

    /// All retained records, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord> + '_ {
        self.records.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    /// Number of retained records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are retained.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sequence of current states: the first record's `from`, then every
    /// record's `to`.
    pub fn get_path(&self) -> Vec<Option<StateId>> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Wall-clock time between the first and last retained record.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.front(), self.records.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}
