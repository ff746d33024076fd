//! GPIO implementations over embassy-rp

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use skirmish_hal::{InputPin, LedBank, OutputPin};

/// LED on a push-pull output, lit when driven high
pub struct Led<'d> {
    pin: Output<'d>,
}

impl<'d> Led<'d> {
    /// Configure `pin` as an output, initially off
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl OutputPin for Led<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Electrical level of a pressed button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the line high; idle is held low by the pull-down
    ActiveHigh,
    /// Pressed pulls the line low; idle is held high by the pull-up
    ActiveLow,
}

impl Polarity {
    fn pull(self) -> Pull {
        match self {
            Polarity::ActiveHigh => Pull::Down,
            Polarity::ActiveLow => Pull::Up,
        }
    }
}

/// Push button with the internal pull matching its polarity
///
/// [`InputPin::is_high`] reports "pressed" regardless of polarity.
pub struct Button<'d> {
    pin: Input<'d>,
    polarity: Polarity,
}

impl<'d> Button<'d> {
    pub fn new(pin: Peri<'d, AnyPin>, polarity: Polarity) -> Self {
        Self {
            pin: Input::new(pin, polarity.pull()),
            polarity,
        }
    }
}

impl InputPin for Button<'_> {
    fn is_high(&self) -> bool {
        match self.polarity {
            Polarity::ActiveHigh => self.pin.is_high(),
            Polarity::ActiveLow => self.pin.is_low(),
        }
    }
}

/// Build a port from `N` LED pins, bit 0 on `pins[0]`
pub fn led_bank<'d, const N: usize>(pins: [Peri<'d, AnyPin>; N]) -> LedBank<Led<'d>, N> {
    LedBank::new(pins.map(Led::new))
}
