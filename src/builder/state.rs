//! Builder for configuring a node as it is added to a graph.

use crate::core::{GraphError, StateGraph, StateId, StateNode, Triggerer};

/// Fluent builder returned by [`StateGraph::state`].
///
/// Nothing is added to the graph until [`build`](StateBuilder::build).
pub struct StateBuilder<'g, T> {
    graph: &'g mut StateGraph<T>,
    node: StateNode<T>,
    neighbors: Vec<StateId>,
    loops_to_self: bool,
}

impl<'g, T> StateBuilder<'g, T> {
    pub(crate) fn new(graph: &'g mut StateGraph<T>, value: T) -> Self {
        Self {
            graph,
            node: StateNode::new(value),
            neighbors: Vec::new(),
            loops_to_self: false,
        }
    }

    /// Set the triggerer from a predicate closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        self.node.set_triggerer(predicate);
        self
    }

    /// Set an already-built triggerer.
    pub fn triggerer(mut self, triggerer: Triggerer) -> Self {
        self.node.set_triggerer_with(triggerer);
        self
    }

    /// Set the per-tick action.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.node.set_action(action);
        self
    }

    /// Set the enter hook.
    pub fn on_enter<F>(mut self, on_enter: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.node.set_on_enter(on_enter);
        self
    }

    /// Set the exit hook.
    pub fn on_exit<F>(mut self, on_exit: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.node.set_on_exit(on_exit);
        self
    }

    /// Exit automatically once the triggerer stops holding.
    pub fn self_deactivating(mut self, self_deactivates: bool) -> Self {
        self.node.set_self_deactivates(self_deactivates);
        self
    }

    /// Append an outbound edge. Repeated handles collapse into one edge.
    pub fn neighbor(mut self, neighbor: StateId) -> Self {
        self.neighbors.push(neighbor);
        self
    }

    /// Append an edge from the new node back to itself, after any neighbors
    /// added so far.
    pub fn loops_to_self(mut self) -> Self {
        self.loops_to_self = true;
        self
    }

    /// Insert the node and wire its edges.
    ///
    /// Fails without touching the graph if any neighbor is unknown.
    pub fn build(self) -> Result<StateId, GraphError> {
        let Self {
            graph,
            node,
            neighbors,
            loops_to_self,
        } = self;

        if let Some(unknown) = neighbors.iter().find(|n| !graph.contains(**n)) {
            return Err(GraphError::UnknownState {
                index: unknown.index(),
                len: graph.len(),
            });
        }

        let id = graph.insert(node);
        for neighbor in neighbors {
            graph.add_neighbor(id, neighbor)?;
        }
        if loops_to_self {
            graph.add_neighbor(id, id)?;
        }
        Ok(id)
    }
}
