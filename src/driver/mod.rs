//! Reference tick driver.
//!
//! The core types never run on their own; something has to call `update`
//! and `next_state` once per frame. [`TickDriver`] is that caller, with the
//! call order made explicit by [`TickOrder`]:
//!
//! - `UpdateThenProbe` (default): run the current state, then probe its
//!   neighbors. A newly entered state first runs on the following tick.
//! - `ProbeThenUpdate`: probe first, then run whichever state is current,
//!   so a newly entered state runs on the tick it was entered.
//!
//! In both orders the driver exits the previous state after a transition,
//! except for a self-loop.

mod config;
mod error;
mod machine;

pub use config::{DriverConfig, TickOrder};
pub use error::DriverError;
pub use machine::{TickDriver, TickOutcome};
