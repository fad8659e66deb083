//! Tick driver that walks a state graph once per simulation step.

use super::config::{DriverConfig, TickOrder};
use super::error::DriverError;
use crate::core::{GraphError, StateGraph, StateId, TransitionLog, TransitionRecord};
use chrono::Utc;

/// What happened during a single [`TickDriver::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No state is current; nothing ran.
    Idle,

    /// The current state ran and no neighbor triggered.
    Stayed(StateId),

    /// A neighbor triggered and became current. `from == to` for a
    /// self-loop, in which case the state was re-entered but not exited.
    Transitioned { from: StateId, to: StateId },

    /// The current state is no longer active. `to` is the triggered
    /// neighbor or fallback that took over, or `None` if the driver went idle.
    ///
    /// Under [`TickOrder::ProbeThenUpdate`] a state entered on this tick can
    /// deactivate itself in its first update. `from` is then the newly
    /// entered state, and the transition into it is only visible in
    /// [`TickDriver::history`].
    Deactivated { from: StateId, to: Option<StateId> },
}

/// Reference tick driver.
///
/// Owns a [`StateGraph`] and the handle of the current state. Each call to
/// [`tick`](TickDriver::tick) runs the current state and probes its
/// neighbors in the order selected by [`TickOrder`]. When a neighbor
/// triggers, the previous state is exited (unless it is the same state).
pub struct TickDriver<T> {
    graph: StateGraph<T>,
    current: Option<StateId>,
    fallback: Option<StateId>,
    ticks: u64,
    history: TransitionLog,
    config: DriverConfig,
}

impl<T> TickDriver<T> {
    /// Create an idle driver with the default config.
    pub fn new(graph: StateGraph<T>) -> Self {
        let config = DriverConfig::default();
        Self {
            graph,
            current: None,
            fallback: None,
            ticks: 0,
            history: Self::log_for(&config),
            config,
        }
    }

    /// Create an idle driver with a validated config.
    pub fn with_config(graph: StateGraph<T>, config: DriverConfig) -> Result<Self, DriverError> {
        config.validate()?;
        Ok(Self {
            graph,
            current: None,
            fallback: None,
            ticks: 0,
            history: Self::log_for(&config),
            config,
        })
    }

    /// State entered when the current state deactivates itself and none of
    /// its neighbors trigger.
    pub fn with_fallback(mut self, fallback: StateId) -> Result<Self, DriverError> {
        self.ensure_known(fallback)?;
        self.fallback = Some(fallback);
        Ok(self)
    }

    /// The driven graph.
    pub fn graph(&self) -> &StateGraph<T> {
        &self.graph
    }

    /// Mutable access to the driven graph.
    pub fn graph_mut(&mut self) -> &mut StateGraph<T> {
        &mut self.graph
    }

    /// Give the graph back.
    pub fn into_graph(self) -> StateGraph<T> {
        self.graph
    }

    /// Handle of the current state.
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Configured fallback state.
    pub fn fallback(&self) -> Option<StateId> {
        self.fallback
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Log of current-state changes.
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    /// Active configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Make `initial` the current state, entering it unconditionally.
    ///
    /// A different previously current state is exited first.
    pub fn start(&mut self, initial: StateId) -> Result<(), DriverError> {
        self.ensure_known(initial)?;
        let previous = self.current;
        if let Some(previous) = previous.filter(|p| *p != initial) {
            self.graph.exit(previous)?;
        }
        self.graph.enter(initial)?;
        self.current = Some(initial);
        tracing::debug!(state = %initial, tick = self.ticks, "driver started");
        self.record(previous, Some(initial));
        Ok(())
    }

    /// Exit the current state and go idle. Returns the state that was current.
    pub fn stop(&mut self) -> Result<Option<StateId>, DriverError> {
        let Some(current) = self.current.take() else {
            return Ok(None);
        };
        self.graph.exit(current)?;
        tracing::debug!(state = %current, tick = self.ticks, "driver stopped");
        self.record(Some(current), None);
        Ok(Some(current))
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Result<TickOutcome, DriverError> {
        let outcome = match self.current {
            None => TickOutcome::Idle,
            Some(current) => match self.config.order {
                TickOrder::UpdateThenProbe => self.update_then_probe(current)?,
                TickOrder::ProbeThenUpdate => self.probe_then_update(current)?,
            },
        };
        self.ticks += 1;
        Ok(outcome)
    }

    /// Run ticks until the driver goes idle or `max_ticks` have elapsed.
    /// Returns the number of ticks run.
    pub fn run_until_idle(&mut self, max_ticks: u64) -> Result<u64, DriverError> {
        let mut ran = 0;
        while ran < max_ticks && self.current.is_some() {
            self.tick()?;
            ran += 1;
        }
        Ok(ran)
    }

    fn update_then_probe(&mut self, current: StateId) -> Result<TickOutcome, DriverError> {
        if !self.graph.update(current)? {
            return self.recover(current);
        }
        match self.graph.next_state(current)? {
            Some(next) => self.switch(current, next),
            None => Ok(TickOutcome::Stayed(current)),
        }
    }

    fn probe_then_update(&mut self, current: StateId) -> Result<TickOutcome, DriverError> {
        let outcome = match self.graph.next_state(current)? {
            Some(next) => self.switch(current, next)?,
            None => TickOutcome::Stayed(current),
        };
        let running = match outcome {
            TickOutcome::Transitioned { to, .. } => to,
            _ => current,
        };
        if !self.graph.update(running)? {
            return self.recover(running);
        }
        Ok(outcome)
    }

    fn switch(&mut self, from: StateId, to: StateId) -> Result<TickOutcome, DriverError> {
        if from != to {
            self.graph.exit(from)?;
        }
        self.current = Some(to);
        tracing::debug!(%from, %to, tick = self.ticks, "state transition");
        self.record(Some(from), Some(to));
        Ok(TickOutcome::Transitioned { from, to })
    }

    fn recover(&mut self, from: StateId) -> Result<TickOutcome, DriverError> {
        let next = match self.graph.next_state(from)? {
            Some(next) => Some(next),
            None => match self.fallback {
                Some(fallback) => {
                    self.graph.enter(fallback)?;
                    tracing::debug!(%from, to = %fallback, tick = self.ticks, "entered fallback state");
                    Some(fallback)
                }
                None => {
                    tracing::warn!(%from, tick = self.ticks, "state deactivated with no successor; driver idle");
                    None
                }
            },
        };
        self.current = next;
        self.record(Some(from), next);
        Ok(TickOutcome::Deactivated { from, to: next })
    }

    fn record(&mut self, from: Option<StateId>, to: Option<StateId>) {
        if !self.config.record_history {
            return;
        }
        self.history.record(TransitionRecord {
            from,
            to,
            tick: self.ticks,
            timestamp: Utc::now(),
        });
    }

    fn ensure_known(&self, id: StateId) -> Result<(), DriverError> {
        if self.graph.contains(id) {
            return Ok(());
        }
        Err(GraphError::UnknownState {
            index: id.index(),
            len: self.graph.len(),
        }
        .into())
    }

    fn log_for(config: &DriverConfig) -> TransitionLog {
        match config.history_capacity {
            Some(capacity) => TransitionLog::bounded(capacity),
            None => TransitionLog::new(),
        }
    }
}
