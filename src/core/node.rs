//! A single predicate-triggered state.

use super::graph::StateId;
use super::hook::Hook;
use super::triggerer::Triggerer;
use std::fmt;

/// A unit of behavior in a state graph.
///
/// Each node carries a payload, a [`Triggerer`] deciding when it activates,
/// an action run every tick while active, enter/exit hooks and an ordered
/// list of neighbor handles. The `active` flag only changes through
/// [`enter`](StateNode::enter) and [`exit`](StateNode::exit).
///
/// Nodes normally live inside a [`StateGraph`](super::StateGraph), which owns
/// the topology and resolves neighbor handles.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::core::StateNode;
///
/// let swings = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&swings);
///
/// let mut attack = StateNode::new("attack");
/// attack.set_action(move || counter.set(counter.get() + 1));
///
/// attack.update();
/// assert_eq!(swings.get(), 0); // inactive nodes do nothing
///
/// attack.enter();
/// attack.update();
/// assert_eq!(swings.get(), 1);
/// ```
pub struct StateNode<T> {
    value: T,
    triggerer: Triggerer,
    action: Hook,
    on_enter: Hook,
    on_exit: Hook,
    active: bool,
    self_deactivates: bool,
    neighbors: Vec<StateId>,
}

impl<T> StateNode<T> {
    /// Create an inactive node with a never-firing triggerer and no hooks.
    pub fn new(value: T) -> Self {
        Self {
            value,
            triggerer: Triggerer::never(),
            action: Hook::Absent,
            on_enter: Hook::Absent,
            on_exit: Hook::Absent,
            active: false,
            self_deactivates: false,
            neighbors: Vec::new(),
        }
    }

    /// The node's payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replace the payload.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Replace the triggerer. Replacement always takes effect.
    pub fn set_triggerer<F>(&mut self, predicate: F)
    where
        F: FnMut() -> bool + 'static,
    {
        self.triggerer = Triggerer::new(predicate);
    }

    /// Install an already-built triggerer.
    pub fn set_triggerer_with(&mut self, triggerer: Triggerer) {
        self.triggerer = triggerer;
    }

    /// Reset the triggerer to the inert never-firing predicate.
    ///
    /// A node never holds an empty predicate, so a later
    /// [`set_triggerer`](StateNode::set_triggerer) still works.
    pub fn clear_triggerer(&mut self) {
        self.triggerer = Triggerer::never();
    }

    /// Set the action run on every [`update`](StateNode::update) while active.
    pub fn set_action<F>(&mut self, action: F)
    where
        F: FnMut() + 'static,
    {
        self.action = Hook::new(action);
    }

    /// Remove the action.
    pub fn clear_action(&mut self) {
        self.action = Hook::Absent;
    }

    /// Set the callback run on every [`enter`](StateNode::enter).
    pub fn set_on_enter<F>(&mut self, on_enter: F)
    where
        F: FnMut() + 'static,
    {
        self.on_enter = Hook::new(on_enter);
    }

    /// Remove the enter callback.
    pub fn clear_on_enter(&mut self) {
        self.on_enter = Hook::Absent;
    }

    /// Set the callback run when an active node exits.
    pub fn set_on_exit<F>(&mut self, on_exit: F)
    where
        F: FnMut() + 'static,
    {
        self.on_exit = Hook::new(on_exit);
    }

    /// Remove the exit callback.
    pub fn clear_on_exit(&mut self) {
        self.on_exit = Hook::Absent;
    }

    /// Whether the node exits itself once its triggerer stops holding.
    pub fn self_deactivates(&self) -> bool {
        self.self_deactivates
    }

    /// Enable or disable self-deactivation.
    pub fn set_self_deactivates(&mut self, self_deactivates: bool) {
        self.self_deactivates = self_deactivates;
    }

    /// True while this node is the executing state.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether an action is installed.
    pub fn has_action(&self) -> bool {
        self.action.is_present()
    }

    /// Outbound neighbor handles in insertion order.
    pub fn neighbors(&self) -> &[StateId] {
        &self.neighbors
    }

    /// Evaluate the triggerer and enter the node if it holds.
    ///
    /// This is the only path by which an inactive node becomes active on its
    /// own. Returns whether the node was entered.
    pub fn check_triggerer(&mut self) -> bool {
        if self.triggerer.check() {
            self.enter();
            return true;
        }
        false
    }

    /// Force the node active and run `on_enter`.
    ///
    /// Not idempotent: entering an already active node runs `on_enter` again.
    pub fn enter(&mut self) {
        self.active = true;
        self.on_enter.fire();
    }

    /// Run one tick of an active node.
    ///
    /// Runs the action, then exits if the node self-deactivates and its
    /// triggerer no longer holds. Never enters a node.
    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.action.fire();
        if self.self_deactivates && !self.triggerer.check() {
            self.exit();
        }
    }

    /// Deactivate the node and run `on_exit`. No-op when inactive.
    pub fn exit(&mut self) {
        if self.active {
            self.active = false;
            self.on_exit.fire();
        }
    }

    pub(crate) fn add_neighbor(&mut self, neighbor: StateId) -> bool {
        if self.neighbors.contains(&neighbor) {
            return false;
        }
        self.neighbors.push(neighbor);
        true
    }

    pub(crate) fn remove_neighbor(&mut self, neighbor: StateId) -> bool {
        match self.neighbors.iter().position(|n| *n == neighbor) {
            Some(index) => {
                self.neighbors.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_all_neighbors(&mut self) -> bool {
        self.neighbors.clear();
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for StateNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("value", &self.value)
            .field("active", &self.active)
            .field("self_deactivates", &self.self_deactivates)
            .field("action", &self.action)
            .field("on_enter", &self.on_enter)
            .field("on_exit", &self.on_exit)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}
