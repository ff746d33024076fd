//! Output port abstraction
//!
//! An output port is a group of up to eight LED lines written as one byte.
//! Ports may be shared with unrelated functionality, so every write carries
//! a mask and bits outside it must be left as they are.

use crate::gpio::OutputPin;

/// 8-bit output port
pub trait OutputPort {
    /// Current port value as last written
    fn read(&self) -> u8;

    /// Write the port value unconditionally
    fn write(&mut self, value: u8);

    /// Write only the bits selected by `mask`
    ///
    /// Bits of `value` outside `mask` are ignored; bits of the port outside
    /// `mask` keep their previous level.
    fn write_masked(&mut self, value: u8, mask: u8) {
        let merged = (self.read() & !mask) | (value & mask);
        self.write(merged);
    }
}

/// Port built from individual LED pins, bit `i` driving `leds[i]`
///
/// Bits at or above `N` have no LED; they read as zero and writes to them
/// are dropped.
pub struct LedBank<P, const N: usize> {
    leds: [P; N],
}

impl<P: OutputPin, const N: usize> LedBank<P, N> {
    pub fn new(leds: [P; N]) -> Self {
        Self { leds }
    }

    /// Release the pins
    pub fn into_inner(self) -> [P; N] {
        self.leds
    }
}

impl<P: OutputPin, const N: usize> OutputPort for LedBank<P, N> {
    fn read(&self) -> u8 {
        self.leds
            .iter()
            .enumerate()
            .take(8)
            .filter(|(_, led)| led.is_set_high())
            .fold(0, |acc, (bit, _)| acc | (1 << bit))
    }

    fn write(&mut self, value: u8) {
        for (bit, led) in self.leds.iter_mut().enumerate().take(8) {
            led.set_state(value & (1 << bit) != 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Register(u8);

    impl OutputPort for Register {
        fn read(&self) -> u8 {
            self.0
        }
        fn write(&mut self, value: u8) {
            self.0 = value;
        }
    }

    #[test]
    fn test_masked_write_preserves_outside_bits() {
        let mut port = Register(0b1010_0000);
        port.write_masked(0b0000_0111, 0x0F);
        assert_eq!(port.read(), 0b1010_0111);
    }

    #[test]
    fn test_masked_write_ignores_value_outside_mask() {
        let mut port = Register(0);
        port.write_masked(0xFF, 0x03);
        assert_eq!(port.read(), 0x03);
    }

    #[test]
    fn test_masked_clear() {
        let mut port = Register(0xFF);
        port.write_masked(0, 0x0F);
        assert_eq!(port.read(), 0xF0);
    }

    #[derive(Default)]
    struct Led(bool);

    impl OutputPin for Led {
        fn set_high(&mut self) {
            self.0 = true;
        }
        fn set_low(&mut self) {
            self.0 = false;
        }
        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_led_bank_drives_pins_by_bit() {
        let mut bank: LedBank<Led, 4> = LedBank::new(Default::default());
        bank.write(0b1010);
        let leds = bank.into_inner();
        assert!(!leds[0].0);
        assert!(leds[1].0);
        assert!(!leds[2].0);
        assert!(leds[3].0);
    }

    #[test]
    fn test_led_bank_drops_missing_bits() {
        let mut bank: LedBank<Led, 2> = LedBank::new(Default::default());
        bank.write_masked(0xFF, 0x03);
        assert_eq!(bank.read(), 0x03);
        bank.write(0b0100);
        assert_eq!(bank.read(), 0);
    }
}
