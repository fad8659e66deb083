//! Labels for state payloads.
//!
//! A [`StateNode`](super::StateNode) carries an arbitrary payload. Features
//! that need to name, compare, or persist that payload ask for this trait.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that label a state node.
///
/// Usually implemented by a plain enum through [`state_enum!`](crate::state_enum).
///
/// # Example
///
/// ```rust
/// use tickstate::core::StateValue;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Motion {
///     Idle,
///     Walk,
///     Attack,
/// }
///
/// impl StateValue for Motion {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::Walk => "Walk",
///             Self::Attack => "Attack",
///         }
///     }
/// }
///
/// assert_eq!(Motion::Attack.name(), "Attack");
/// ```
pub trait StateValue: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Get the label's name for display/logging.
    fn name(&self) -> &str;
}
