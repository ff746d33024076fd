//! Board bring-up
//!
//! Pin numbers, button polarity and calibration come from `game.toml`,
//! checked and turned into Rust by `build.rs`.

use embassy_rp::gpio::AnyPin;
use embassy_rp::{Peri, Peripherals};
use skirmish_core::config::Calibration;
use skirmish_core::traits::{PinLines, PortBank};
use skirmish_hal_rp2040::{led_bank, Button, Led, LedBank, Polarity};

include!(concat!(env!("OUT_DIR"), "/config.rs"));

/// GPIOs claimed by the game
pub struct BoardPins {
    pub level: [Peri<'static, AnyPin>; 4],
    pub action: [Peri<'static, AnyPin>; 2],
    pub count: [Peri<'static, AnyPin>; 8],
    pub port_select: Peri<'static, AnyPin>,
    pub configure: Peri<'static, AnyPin>,
}

pub type Lines = PinLines<Button<'static>, Button<'static>>;

pub type Ports = PortBank<
    LedBank<Led<'static>, 4>,
    LedBank<Led<'static>, 2>,
    LedBank<Led<'static>, 8>,
>;

/// Configure the buttons and LED ports
pub fn split(p: Peripherals) -> (Lines, Ports) {
    let pins = take_pins(p);

    let lines = PinLines {
        port_select: Button::new(pins.port_select, BUTTON_POLARITY),
        configure: Button::new(pins.configure, BUTTON_POLARITY),
    };
    let ports = PortBank {
        level: led_bank(pins.level),
        action: led_bank(pins.action),
        count: led_bank(pins.count),
    };

    (lines, ports)
}
