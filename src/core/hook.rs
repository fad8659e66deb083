//! Optional callbacks attached to a state node.

use std::fmt;

/// A callback slot that is either empty or holds a closure.
///
/// Used for a node's `action`, `on_enter` and `on_exit`. Firing an absent
/// hook does nothing.
#[derive(Default)]
pub enum Hook {
    /// No callback installed.
    #[default]
    Absent,
    /// Callback invoked on every [`fire`](Hook::fire).
    Present(Box<dyn FnMut()>),
}

impl Hook {
    /// Wrap a closure in a present hook.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Hook::Present(Box::new(callback))
    }

    /// Invoke the callback if one is installed.
    pub fn fire(&mut self) {
        if let Hook::Present(callback) = self {
            callback();
        }
    }

    /// Whether a callback is installed.
    pub fn is_present(&self) -> bool {
        matches!(self, Hook::Present(_))
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hook::Absent => write!(f, "Hook::Absent"),
            Hook::Present(_) => write!(f, "Hook::Present(..)"),
        }
    }
}
