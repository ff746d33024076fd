//! RP2040-specific HAL for the Skirmish game board
//!
//! Implements the shared `skirmish-hal` traits over embassy-rp GPIO:
//!
//! - [`gpio::Led`] - push-pull LED output
//! - [`gpio::Button`] - button input with pull and polarity
//! - [`gpio::led_bank`] - an 8-bit port built from individual LED pins

#![no_std]

pub mod gpio;

pub use gpio::{led_bank, Button, Led, Polarity};
pub use skirmish_hal::{InputPin, LedBank, OutputPin, OutputPort};
