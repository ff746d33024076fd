//! Board I/O traits
//!
//! These traits define the interface between the tasks and whatever
//! drives the physical lines and LEDs.

pub mod board;

pub use board::{Channel, InputLines, OutputPorts, PinLines, Port, PortBank};
