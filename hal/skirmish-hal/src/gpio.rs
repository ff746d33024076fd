//! GPIO pin abstractions
//!
//! Digital input and output pins, implemented by chip-specific HALs.

/// Digital output pin
pub trait OutputPin {
    /// Drive the pin high (LED on)
    fn set_high(&mut self);

    /// Drive the pin low (LED off)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// `is_high` must reflect the logical "asserted" level: active-low buttons
/// are inverted by the implementation, not by the caller.
pub trait InputPin {
    /// Check if the line is asserted
    fn is_high(&self) -> bool;

    /// Check if the line is released
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_set_state_dispatches() {
        let mut led = Led(false);
        led.set_state(true);
        assert!(led.is_set_high());
        led.set_state(false);
        assert!(!led.is_set_high());
    }

    #[test]
    fn test_is_low_default() {
        struct Line(bool);
        impl InputPin for Line {
            fn is_high(&self) -> bool {
                self.0
            }
        }
        assert!(Line(false).is_low());
        assert!(!Line(true).is_low());
    }
}
