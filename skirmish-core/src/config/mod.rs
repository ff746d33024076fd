//! Configuration types
//!
//! Calibration constants and fixed game limits. Calibration values are
//! supplied by the firmware build (see `skirmish-firmware/game.toml`).

pub mod calibration;
pub mod types;

pub use calibration::*;
pub use types::*;
