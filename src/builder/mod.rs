//! Builder API for ergonomic graph construction.
//!
//! [`StateGraph::state`](crate::core::StateGraph::state) returns a
//! [`StateBuilder`]; [`state_enum!`](crate::state_enum) declares payload
//! labels. [`chain`] wires a linear sequence of states.

pub mod macros;
pub mod state;

pub use state::StateBuilder;

use crate::core::{GraphError, StateGraph, StateId};

/// Link `states` so each one is a neighbor of the one before it.
///
/// Returns the number of edges that were newly added.
///
/// # Example
///
/// ```
/// use tickstate::builder::chain;
/// use tickstate::core::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let a = graph.add_state('a');
/// let b = graph.add_state('b');
/// let c = graph.add_state('c');
///
/// assert_eq!(chain(&mut graph, &[a, b, c, a]).unwrap(), 3);
/// assert_eq!(graph.neighbors(c).unwrap(), &[a]);
/// ```
pub fn chain<T>(graph: &mut StateGraph<T>, states: &[StateId]) -> Result<usize, GraphError> {
    let mut added = 0;
    for pair in states.windows(2) {
        if graph.add_neighbor(pair[0], pair[1])? {
            added += 1;
        }
    }
    Ok(added)
}
