//! Timing calibration
//!
//! The loop never reads a clock. Every delay is a number of scheduler
//! rounds per tick, tuned on the bench until one tick lasts about 500ms.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference rounds-per-tick for the power-on flash
pub const DEFAULT_INIT_TICKS: u32 = 45_000;

/// Reference rounds-per-tick for blinking
pub const DEFAULT_BLINK_TICKS: u32 = 37_000;

/// Reference rounds-per-tick for the countdown
pub const DEFAULT_COUNTDOWN_TICKS: u32 = 42_000;

/// Calibration field identifiers, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    InitTicks,
    BlinkTicks,
    CountdownTicks,
}

impl Field {
    /// Key of this field in the config file
    pub const fn key(self) -> &'static str {
        match self {
            Field::InitTicks => "init_ticks",
            Field::BlinkTicks => "blink_ticks",
            Field::CountdownTicks => "countdown_ticks",
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A duration of zero rounds per tick
    ZeroDuration(Field),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDuration(field) => {
                write!(f, "{} must be at least 1", field.key())
            }
        }
    }
}

/// Rounds-per-tick for each timed phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Calibration {
    /// Power-on flash, run for [`INIT_REPEATS`](super::INIT_REPEATS) ticks
    pub init_ticks: u32,
    /// Half period of a blinking port
    pub blink_ticks: u32,
    /// Time each countdown value stays on screen
    pub countdown_ticks: u32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            init_ticks: DEFAULT_INIT_TICKS,
            blink_ticks: DEFAULT_BLINK_TICKS,
            countdown_ticks: DEFAULT_COUNTDOWN_TICKS,
        }
    }
}

impl Calibration {
    /// Create a validated calibration
    pub fn new(init_ticks: u32, blink_ticks: u32, countdown_ticks: u32) -> Result<Self, ConfigError> {
        let calibration = Self {
            init_ticks,
            blink_ticks,
            countdown_ticks,
        };
        calibration.validate()?;
        Ok(calibration)
    }

    /// Check that every duration is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            (Field::InitTicks, self.init_ticks),
            (Field::BlinkTicks, self.blink_ticks),
            (Field::CountdownTicks, self.countdown_ticks),
        ];
        for (field, value) in fields {
            if value == 0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Calibration::default().validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            Calibration::new(10, 0, 10),
            Err(ConfigError::ZeroDuration(Field::BlinkTicks))
        );
        assert_eq!(
            Calibration::new(0, 0, 0),
            Err(ConfigError::ZeroDuration(Field::InitTicks))
        );
    }

    #[test]
    fn test_error_message_names_key() {
        let msg = ConfigError::ZeroDuration(Field::CountdownTicks).to_string();
        assert_eq!(msg, "countdown_ticks must be at least 1");
    }
}
