//! Skirmish Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that chip-specific
//! HALs implement. The game core only ever talks to these traits, so the
//! same task code runs on the RP2040 board and in the host simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (skirmish-firmware, etc.)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  skirmish-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ skirmish-hal- │       │ skirmish-core │
//! │    rp2040     │       │   ::sim       │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`port::OutputPort`] - Masked 8-bit LED port
//! - [`port::LedBank`] - `OutputPort` over individual LED pins

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod port;

pub use gpio::{InputPin, OutputPin};
pub use port::{LedBank, OutputPort};
