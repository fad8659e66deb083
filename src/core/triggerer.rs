//! Activation predicates for state nodes.
//!
//! A triggerer is a zero-argument predicate deciding whether a node should
//! become (or stay) active. Input polling, timers and animation queries are
//! all expressed as triggerers supplied by whoever builds the graph.

use std::fmt;

/// Zero-argument predicate that governs a node's activation.
///
/// The predicate may capture shared state (an `Rc<Cell<bool>>` toggled by an
/// input layer, a timer's "finished" flag) and is evaluated every time the
/// node is checked.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use tickstate::core::Triggerer;
///
/// let pressed = Rc::new(Cell::new(false));
/// let key = Rc::clone(&pressed);
/// let mut trigger = Triggerer::new(move || key.get());
///
/// assert!(!trigger.check());
/// pressed.set(true);
/// assert!(trigger.check());
/// ```
pub struct Triggerer {
    predicate: Box<dyn FnMut() -> bool>,
}

impl Triggerer {
    /// Create a triggerer from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        Triggerer {
            predicate: Box::new(predicate),
        }
    }

    /// A triggerer that never fires. Every node starts with this one.
    pub fn never() -> Self {
        Self::new(|| false)
    }

    /// A triggerer that always fires.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&mut self) -> bool {
        (self.predicate)()
    }
}

impl Default for Triggerer {
    fn default() -> Self {
        Self::never()
    }
}

impl fmt::Debug for Triggerer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Triggerer").finish_non_exhaustive()
    }
}
