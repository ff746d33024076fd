//! Board-agnostic core logic for the Skirmish LED game
//!
//! Four cooperative tasks run in a fixed round-robin order, forever:
//!
//! ```text
//!   ┌───────┐   ┌───────┐   ┌─────────┐   ┌──────┐
//!   │ Timer │ → │ Input │ → │ Display │ → │ Game │ ─┐
//!   └───────┘   └───────┘   └─────────┘   └──────┘  │
//!       ▲                                           │
//!       └───────────────────────────────────────────┘
//! ```
//!
//! No task ever blocks. Delays are counted in scheduler rounds by the
//! [`timer::Timer`], and tasks talk to each other only through the owned
//! state that [`scheduler::Scheduler`] lends to them in turn.
//!
//! - [`timer`] - iteration-counted delays
//! - [`input`] - pulse counting on two input lines
//! - [`display`] - LED port patterns and blinking
//! - [`game`] - the session state machine
//! - [`scheduler`] - the round-robin loop
//! - [`config`] - calibration constants
//! - [`traits`] - board I/O seams
//! - [`sim`] - in-memory board for host runs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod game;
pub mod input;
pub mod scheduler;
pub mod sim;
pub mod timer;
pub mod traits;
