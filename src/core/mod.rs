//! Core state graph types.
//!
//! This module contains the state machine primitive itself:
//! - `StateNode`, the predicate-triggered unit of behavior
//! - `StateGraph`, the arena owning nodes and their neighbor edges
//! - `Triggerer` and `Hook`, the injected predicate and callbacks
//! - `TransitionLog`, a record of which state was current when
//!
//! Everything here is synchronous and single-threaded. Nothing runs unless
//! the caller invokes it.

mod error;
mod graph;
mod history;
mod hook;
mod node;
mod triggerer;
mod value;

pub use error::GraphError;
pub use graph::{StateGraph, StateId};
pub use history::{TransitionLog, TransitionRecord};
pub use hook::Hook;
pub use node::StateNode;
pub use triggerer::Triggerer;
pub use value::StateValue;
