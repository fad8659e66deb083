//! Tickstate: a tick-driven finite state machine
//!
//! Tickstate models per-frame behavior (character control, animation gating,
//! timed actions) as a graph of predicate-triggered states. It knows nothing
//! about input, rendering or timers: those are injected as zero-argument
//! predicates and callbacks.
//!
//! # Core Concepts
//!
//! - **StateNode**: a payload, a triggerer, a per-tick action, enter/exit
//!   hooks, and ordered neighbor edges
//! - **StateGraph**: the arena that owns nodes; edges are `StateId` handles,
//!   so cycles and self-loops are fine
//! - **next_state**: probes neighbors in insertion order; the first one whose
//!   triggerer holds is entered and returned
//! - **TickDriver**: an optional driver that runs the current state once per
//!   tick and follows transitions
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use tickstate::core::StateGraph;
//! use tickstate::driver::{TickDriver, TickOutcome};
//! use tickstate::state_enum;
//!
//! state_enum! {
//!     enum Motion {
//!         Idle,
//!         Attack,
//!     }
//! }
//!
//! let key = Rc::new(Cell::new(false));
//! let pressed = Rc::clone(&key);
//!
//! let mut graph = StateGraph::new();
//! let idle = graph.add_state(Motion::Idle);
//! let attack = graph
//!     .state(Motion::Attack)
//!     .when(move || pressed.get())
//!     .build()
//!     .unwrap();
//! graph.add_neighbor(idle, attack).unwrap();
//!
//! let mut driver = TickDriver::new(graph);
//! driver.start(idle).unwrap();
//! assert_eq!(driver.tick().unwrap(), TickOutcome::Stayed(idle));
//!
//! key.set(true);
//! assert_eq!(
//!     driver.tick().unwrap(),
//!     TickOutcome::Transitioned { from: idle, to: attack }
//! );
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{Hook, StateGraph, StateId, StateNode, StateValue, Triggerer};
pub use crate::driver::{DriverConfig, TickDriver, TickOrder, TickOutcome};
