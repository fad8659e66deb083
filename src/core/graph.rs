//! Arena-backed state graph.
//!
//! The graph owns every node; nodes refer to each other only through
//! [`StateId`] handles, so cycles and self-loops are ordinary data. Nodes are
//! never removed, which keeps every issued handle valid for the lifetime of
//! the graph.

use super::error::GraphError;
use super::node::StateNode;
use crate::builder::StateBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle to a node inside a [`StateGraph`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(index)
    }

    /// Position of the node in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateId({})", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owner of a set of [`StateNode`]s and their neighbor edges.
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateGraph;
///
/// let mut graph = StateGraph::new();
/// let idle = graph.add_state("idle");
/// let attack = graph.add_state("attack");
/// graph[attack].set_triggerer(|| true);
///
/// assert!(graph.add_neighbor(idle, attack).unwrap());
/// assert!(!graph.add_neighbor(idle, attack).unwrap());
///
/// graph.enter(idle).unwrap();
/// assert_eq!(graph.next_state(idle).unwrap(), Some(attack));
/// assert!(graph[attack].is_active());
/// ```
pub struct StateGraph<T> {
    nodes: Vec<StateNode<T>>,
}

impl<T> Default for StateGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StateGraph<T> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add an inert node holding `value` and return its handle.
    pub fn add_state(&mut self, value: T) -> StateId {
        self.insert(StateNode::new(value))
    }

    /// Add an already configured node.
    ///
    /// The node must not reference handles from another graph; its neighbor
    /// list is cleared on insertion.
    pub fn insert(&mut self, mut node: StateNode<T>) -> StateId {
        node.remove_all_neighbors();
        let id = StateId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Start building a configured node.
    pub fn state(&mut self, value: T) -> StateBuilder<'_, T> {
        StateBuilder::new(self, value)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `id` belongs to this graph.
    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Look up a node.
    pub fn get(&self, id: StateId) -> Option<&StateNode<T>> {
        self.nodes.get(id.0)
    }

    /// Look up a node mutably.
    pub fn get_mut(&mut self, id: StateId) -> Option<&mut StateNode<T>> {
        self.nodes.get_mut(id.0)
    }

    /// All handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> + '_ {
        (0..self.nodes.len()).map(StateId)
    }

    /// All nodes with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &StateNode<T>)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (StateId(i), n))
    }

    /// Handles of every currently active node.
    pub fn active(&self) -> impl Iterator<Item = StateId> + '_ {
        self.iter().filter(|(_, n)| n.is_active()).map(|(id, _)| id)
    }

    /// First node whose payload equals `value`.
    pub fn find(&self, value: &T) -> Option<StateId>
    where
        T: PartialEq,
    {
        self.nodes
            .iter()
            .position(|n| n.value() == value)
            .map(StateId)
    }

    /// Add `to` as a neighbor of `from`.
    ///
    /// Returns `Ok(false)` if the edge already exists. Self-loops are allowed.
    pub fn add_neighbor(&mut self, from: StateId, to: StateId) -> Result<bool, GraphError> {
        self.check(to)?;
        Ok(self.node_mut(from)?.add_neighbor(to))
    }

    /// Remove the edge `from -> to`, reporting whether it existed.
    pub fn remove_neighbor(&mut self, from: StateId, to: StateId) -> Result<bool, GraphError> {
        self.check(to)?;
        Ok(self.node_mut(from)?.remove_neighbor(to))
    }

    /// Drop every outbound edge of `from`. Always reports success.
    pub fn remove_all_neighbors(&mut self, from: StateId) -> Result<bool, GraphError> {
        Ok(self.node_mut(from)?.remove_all_neighbors())
    }

    /// Outbound neighbors of `id` in insertion order.
    pub fn neighbors(&self, id: StateId) -> Result<&[StateId], GraphError> {
        Ok(self.node(id)?.neighbors())
    }

    /// Evaluate the triggerer of `id`, entering it if it holds.
    pub fn check_triggerer(&mut self, id: StateId) -> Result<bool, GraphError> {
        let entered = self.node_mut(id)?.check_triggerer();
        if entered {
            tracing::trace!(state = %id, "state triggered");
        }
        Ok(entered)
    }

    /// Force `id` active, running its enter hook.
    pub fn enter(&mut self, id: StateId) -> Result<(), GraphError> {
        self.node_mut(id)?.enter();
        tracing::trace!(state = %id, "state entered");
        Ok(())
    }

    /// Run one tick of `id`. Returns whether the node is still active.
    pub fn update(&mut self, id: StateId) -> Result<bool, GraphError> {
        let node = self.node_mut(id)?;
        let was_active = node.is_active();
        node.update();
        let still_active = node.is_active();
        if was_active && !still_active {
            tracing::trace!(state = %id, "state deactivated itself");
        }
        Ok(still_active)
    }

    /// Deactivate `id`, running its exit hook if it was active.
    pub fn exit(&mut self, id: StateId) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        if node.is_active() {
            node.exit();
            tracing::trace!(state = %id, "state exited");
        }
        Ok(())
    }

    /// Probe the neighbors of `id` for a triggered transition.
    ///
    /// Neighbors are checked in insertion order and the first whose triggerer
    /// holds is entered and returned; later neighbors are not evaluated. The
    /// caller stays active: exiting it is up to the driver.
    pub fn next_state(&mut self, id: StateId) -> Result<Option<StateId>, GraphError> {
        let count = self.node(id)?.neighbors().len();
        for position in 0..count {
            let neighbor = self.nodes[id.0].neighbors()[position];
            if self.nodes[neighbor.0].check_triggerer() {
                tracing::trace!(from = %id, to = %neighbor, "neighbor triggered");
                return Ok(Some(neighbor));
            }
        }
        Ok(None)
    }

    fn check(&self, id: StateId) -> Result<(), GraphError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(self.unknown(id))
        }
    }

    fn node(&self, id: StateId) -> Result<&StateNode<T>, GraphError> {
        let len = self.nodes.len();
        self.nodes.get(id.0).ok_or(GraphError::UnknownState {
            index: id.0,
            len,
        })
    }

    fn node_mut(&mut self, id: StateId) -> Result<&mut StateNode<T>, GraphError> {
        let len = self.nodes.len();
        self.nodes.get_mut(id.0).ok_or(GraphError::UnknownState {
            index: id.0,
            len,
        })
    }

    fn unknown(&self, id: StateId) -> GraphError {
        GraphError::UnknownState {
            index: id.0,
            len: self.nodes.len(),
        }
    }
}

impl<T> Index<StateId> for StateGraph<T> {
    type Output = StateNode<T>;

    /// Panics if `id` was not issued by this graph.
    fn index(&self, id: StateId) -> &StateNode<T> {
        &self.nodes[id.0]
    }
}

impl<T> IndexMut<StateId> for StateGraph<T> {
    fn index_mut(&mut self, id: StateId) -> &mut StateNode<T> {
        &mut self.nodes[id.0]
    }
}

impl<T: fmt::Debug> fmt::Debug for StateGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("nodes", &self.nodes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn flag(initial: bool) -> (Rc<Cell<bool>>, impl FnMut() -> bool + 'static) {
        let cell = Rc::new(Cell::new(initial));
        let probe = Rc::clone(&cell);
        (cell, move || probe.get())
    }

    #[test]
    fn add_state_issues_sequential_handles() {
        let mut graph = StateGraph::new();
        let a = graph.add_state('a');
        let b = graph.add_state('b');

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.find(&'b'), Some(b));
        assert_eq!(graph.find(&'z'), None);
        assert_eq!(graph.ids().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn duplicate_neighbor_is_rejected() {
        let mut graph = StateGraph::new();
        let a = graph.add_state(0);
        let b = graph.add_state(1);

        assert_eq!(graph.add_neighbor(a, b), Ok(true));
        assert_eq!(graph.add_neighbor(a, b), Ok(false));
        assert_eq!(graph.neighbors(a).unwrap(), &[b]);
    }

    #[test]
    fn removing_missing_neighbor_reports_false() {
        let mut graph = StateGraph::new();
        let a = graph.add_state(0);
        let b = graph.add_state(1);
        let c = graph.add_state(2);
        graph.add_neighbor(a, b).unwrap();

        assert_eq!(graph.remove_neighbor(a, c), Ok(false));
        assert_eq!(graph.neighbors(a).unwrap(), &[b]);

        assert_eq!(graph.remove_neighbor(a, b), Ok(true));
        assert!(graph.neighbors(a).unwrap().is_empty());
    }

    #[test]
    fn remove_all_neighbors_always_succeeds() {
        let mut graph = StateGraph::new();
        let a = graph.add_state(0);
        let b = graph.add_state(1);

        assert_eq!(graph.remove_all_neighbors(a), Ok(true));
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(a, a).unwrap();
        assert_eq!(graph.remove_all_neighbors(a), Ok(true));
        assert!(graph.neighbors(a).unwrap().is_empty());
    }

    #[test]
    fn foreign_handles_are_rejected() {
        let mut graph = StateGraph::new();
        let a = graph.add_state(0);
        let foreign = StateId::from_index(9);

        let expected = GraphError::UnknownState { index: 9, len: 1 };
        assert_eq!(graph.add_neighbor(a, foreign), Err(expected.clone()));
        assert_eq!(graph.add_neighbor(foreign, a), Err(expected.clone()));
        assert_eq!(graph.enter(foreign), Err(expected.clone()));
        assert_eq!(graph.next_state(foreign), Err(expected));
        assert!(graph.get(foreign).is_none());
    }

    #[test]
    fn next_state_is_first_match_by_insertion_order() {
        let mut graph = StateGraph::new();
        let origin = graph.add_state("origin");
        let a = graph.add_state("a");
        let b = graph.add_state("b");
        let c = graph.add_state("c");

        let calls = Rc::new(RefCell::new(Vec::new()));
        for (id, fires) in [(a, true), (b, false), (c, true)] {
            let log = Rc::clone(&calls);
            let name = *graph[id].value();
            graph[id].set_triggerer(move || {
                log.borrow_mut().push(name);
                fires
            });
            graph.add_neighbor(origin, id).unwrap();
        }

        assert_eq!(graph.next_state(origin).unwrap(), Some(a));
        assert!(graph[a].is_active());
        assert!(!graph[b].is_active());
        assert!(!graph[c].is_active());
        assert_eq!(*calls.borrow(), vec!["a"]);
    }

    #[test]
    fn next_state_skips_untriggered_neighbors() {
        let mut graph = StateGraph::new();
        let origin = graph.add_state(0);
        let a = graph.add_state(1);
        let b = graph.add_state(2);
        let (_, never) = flag(false);
        let (_, always) = flag(true);
        graph[a].set_triggerer(never);
        graph[b].set_triggerer(always);
        graph.add_neighbor(origin, a).unwrap();
        graph.add_neighbor(origin, b).unwrap();

        assert_eq!(graph.next_state(origin).unwrap(), Some(b));
        assert!(!graph[a].is_active());
    }

    #[test]
    fn next_state_does_not_exit_caller() {
        let mut graph = StateGraph::new();
        let origin = graph.add_state(0);
        let target = graph.add_state(1);
        graph[target].set_triggerer(|| true);
        graph.add_neighbor(origin, target).unwrap();

        graph.enter(origin).unwrap();
        assert_eq!(graph.next_state(origin).unwrap(), Some(target));
        assert!(graph[origin].is_active());
        assert_eq!(graph.active().collect::<Vec<_>>(), vec![origin, target]);
    }

    #[test]
    fn next_state_without_trigger_returns_none() {
        let mut graph = StateGraph::new();
        let origin = graph.add_state(0);
        let target = graph.add_state(1);
        graph.add_neighbor(origin, target).unwrap();

        assert_eq!(graph.next_state(origin).unwrap(), None);
        assert!(!graph[target].is_active());
    }

    #[test]
    fn self_loop_reenters_the_same_node() {
        let mut graph = StateGraph::new();
        let node = graph.add_state(0);
        let enters = Rc::new(Cell::new(0));
        let counter = Rc::clone(&enters);
        graph[node].set_on_enter(move || counter.set(counter.get() + 1));
        graph[node].set_triggerer(|| true);
        graph.add_neighbor(node, node).unwrap();

        graph.enter(node).unwrap();
        assert_eq!(graph.next_state(node).unwrap(), Some(node));
        assert_eq!(enters.get(), 2);
        assert!(graph[node].is_active());
    }

    #[test]
    fn cycles_are_traversable() {
        let mut graph = StateGraph::new();
        let a = graph.add_state('a');
        let b = graph.add_state('b');
        graph[a].set_triggerer(|| true);
        graph[b].set_triggerer(|| true);
        graph.add_neighbor(a, b).unwrap();
        graph.add_neighbor(b, a).unwrap();

        let mut current = a;
        graph.enter(current).unwrap();
        for _ in 0..4 {
            let next = graph.next_state(current).unwrap().unwrap();
            graph.exit(current).unwrap();
            current = next;
        }
        assert_eq!(current, a);
        assert!(graph[a].is_active());
        assert!(!graph[b].is_active());
    }

    #[test]
    fn update_reports_self_deactivation() {
        let mut graph = StateGraph::new();
        let node = graph.add_state(0);
        graph[node].set_self_deactivates(true);

        graph.enter(node).unwrap();
        assert_eq!(graph.update(node), Ok(false));
        assert!(!graph[node].is_active());
    }

    #[test]
    fn insert_drops_foreign_neighbors() {
        let mut node = StateNode::new(0);
        node.add_neighbor(StateId::from_index(42));

        let mut graph = StateGraph::new();
        let id = graph.insert(node);
        assert!(graph[id].neighbors().is_empty());
    }
}
