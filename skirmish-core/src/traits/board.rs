//! Input lines and output ports as seen by the tasks

use skirmish_hal::{InputPin, OutputPort};

/// Input line identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Advances the game to its next phase
    PortSelect,
    /// Changes the value being chosen in the current phase
    Configure,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::PortSelect, Channel::Configure];

    pub(crate) const fn index(self) -> usize {
        match self {
            Channel::PortSelect => 0,
            Channel::Configure => 1,
        }
    }
}

/// Output port identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Level bar, four LEDs
    Level,
    /// Attack/defend indicator, two LEDs
    Action,
    /// Countdown bar, eight LEDs
    Count,
}

impl Port {
    pub const ALL: [Port; 3] = [Port::Level, Port::Action, Port::Count];

    /// Bits of the port owned by the game
    pub const fn mask(self) -> u8 {
        match self {
            Port::Level => 0x0F,
            Port::Action => 0x03,
            Port::Count => 0xFF,
        }
    }
}

/// The two input lines
pub trait InputLines {
    /// Check if `channel` is currently asserted
    fn is_asserted(&self, channel: Channel) -> bool;
}

/// The three output ports
pub trait OutputPorts {
    /// Write the bits of `port` selected by `mask`, keeping the rest
    fn write_masked(&mut self, port: Port, value: u8, mask: u8);

    /// Called once after all three ports have been written for a frame
    fn commit(&mut self) {}
}

/// Input lines backed by two HAL pins
#[derive(Debug)]
pub struct PinLines<P, C> {
    pub port_select: P,
    pub configure: C,
}

impl<P: InputPin, C: InputPin> InputLines for PinLines<P, C> {
    fn is_asserted(&self, channel: Channel) -> bool {
        match channel {
            Channel::PortSelect => self.port_select.is_high(),
            Channel::Configure => self.configure.is_high(),
        }
    }
}

/// Output ports backed by three HAL ports
#[derive(Debug)]
pub struct PortBank<L, A, C> {
    pub level: L,
    pub action: A,
    pub count: C,
}

impl<L: OutputPort, A: OutputPort, C: OutputPort> OutputPorts for PortBank<L, A, C> {
    fn write_masked(&mut self, port: Port, value: u8, mask: u8) {
        match port {
            Port::Level => self.level.write_masked(value, mask),
            Port::Action => self.action.write_masked(value, mask),
            Port::Count => self.count.write_masked(value, mask),
        }
    }
}
