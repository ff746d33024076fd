//! Game task
//!
//! Runs the session: power-on flash, level choice, action choice, countdown,
//! and back to the start. The state machine is explicit, finite, and never
//! terminates.

pub mod machine;

pub use machine::{Game, GameState, Transition};
