//! Round-robin scheduler
//!
//! Owns the four tasks and the board I/O, and runs the tasks in a fixed
//! order, one turn each per round.

pub mod executor;

pub use executor::{RoundReport, Scheduler};
