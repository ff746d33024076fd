//! Input task
//!
//! Turns raw line levels into press counts. A press is counted once, on
//! release, however many rounds the line stays asserted. No debouncing is
//! done here; bounce is filtered by the board.

use crate::traits::{Channel, InputLines};

/// Edge detector and pulse counter for one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputChannel {
    pressed: bool,
    pulses: u8,
}

impl InputChannel {
    /// Feed one sample of the line level
    pub fn sample(&mut self, asserted: bool) {
        if asserted {
            self.pressed = true;
        } else if self.pressed {
            self.pressed = false;
            self.pulses = self.pulses.saturating_add(1);
        }
    }

    /// Line was asserted at the last sample and has not been released
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Pulses counted since the last reset
    pub fn pulses(&self) -> u8 {
        self.pulses
    }

    /// Forget counted pulses; a press in progress is still counted on release
    pub fn reset(&mut self) {
        self.pulses = 0;
    }
}

/// Input task state for both lines
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    channels: [InputChannel; 2],
}

impl Inputs {
    pub const fn new() -> Self {
        Self {
            channels: [
                InputChannel {
                    pressed: false,
                    pulses: 0,
                },
                InputChannel {
                    pressed: false,
                    pulses: 0,
                },
            ],
        }
    }

    /// Input task body, called once per round
    pub fn advance<I: InputLines>(&mut self, lines: &I) {
        for channel in Channel::ALL {
            let asserted = lines.is_asserted(channel);
            self.channels[channel.index()].sample(asserted);
        }
    }

    pub fn channel(&self, channel: Channel) -> &InputChannel {
        &self.channels[channel.index()]
    }

    pub fn pulses(&self, channel: Channel) -> u8 {
        self.channel(channel).pulses()
    }

    pub fn has_pulse(&self, channel: Channel) -> bool {
        self.pulses(channel) != 0
    }

    /// Zero the pulse count of `channel`
    pub fn reset(&mut self, channel: Channel) {
        self.channels[channel.index()].reset();
    }

    pub fn reset_all(&mut self) {
        for channel in Channel::ALL {
            self.reset(channel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimLines;
    use proptest::prelude::*;

    fn hold(inputs: &mut Inputs, lines: &mut SimLines, channel: Channel, rounds: u32) {
        lines.set(channel, true);
        for _ in 0..rounds {
            inputs.advance(&*lines);
        }
        lines.set(channel, false);
        inputs.advance(&*lines);
    }

    #[test]
    fn test_no_pulse_while_held() {
        let mut inputs = Inputs::new();
        let mut lines = SimLines::new();
        lines.set(Channel::PortSelect, true);
        for _ in 0..20 {
            inputs.advance(&lines);
        }
        assert_eq!(inputs.pulses(Channel::PortSelect), 0);
        assert!(inputs.channel(Channel::PortSelect).is_pressed());
    }

    #[test]
    fn test_release_counts_once() {
        let mut inputs = Inputs::new();
        let mut lines = SimLines::new();
        hold(&mut inputs, &mut lines, Channel::Configure, 3);
        assert_eq!(inputs.pulses(Channel::Configure), 1);
        assert_eq!(inputs.pulses(Channel::PortSelect), 0);

        // Staying released adds nothing
        inputs.advance(&lines);
        assert_eq!(inputs.pulses(Channel::Configure), 1);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut inputs = Inputs::new();
        let mut lines = SimLines::new();
        hold(&mut inputs, &mut lines, Channel::PortSelect, 1);
        hold(&mut inputs, &mut lines, Channel::PortSelect, 1);
        hold(&mut inputs, &mut lines, Channel::Configure, 1);
        assert_eq!(inputs.pulses(Channel::PortSelect), 2);
        assert_eq!(inputs.pulses(Channel::Configure), 1);
    }

    #[test]
    fn test_reset_reads_zero() {
        let mut inputs = Inputs::new();
        let mut lines = SimLines::new();
        hold(&mut inputs, &mut lines, Channel::PortSelect, 2);
        inputs.reset(Channel::PortSelect);
        assert_eq!(inputs.pulses(Channel::PortSelect), 0);
        assert!(!inputs.has_pulse(Channel::PortSelect));
    }

    #[test]
    fn test_reset_keeps_latch() {
        let mut inputs = Inputs::new();
        let mut lines = SimLines::new();
        lines.set(Channel::Configure, true);
        inputs.advance(&lines);
        inputs.reset_all();

        lines.set(Channel::Configure, false);
        inputs.advance(&lines);
        assert_eq!(inputs.pulses(Channel::Configure), 1);
    }

    proptest! {
        #[test]
        fn prop_held_press_counts_once(rounds in 1u32..200) {
            let mut inputs = Inputs::new();
            let mut lines = SimLines::new();
            hold(&mut inputs, &mut lines, Channel::PortSelect, rounds);
            prop_assert_eq!(inputs.pulses(Channel::PortSelect), 1);
        }

        #[test]
        fn prop_count_matches_presses(presses in 0u8..40) {
            let mut inputs = Inputs::new();
            let mut lines = SimLines::new();
            for _ in 0..presses {
                hold(&mut inputs, &mut lines, Channel::Configure, 2);
            }
            prop_assert_eq!(inputs.pulses(Channel::Configure), presses);
        }
    }
}
