//! In-memory board for host runs
//!
//! [`SimLines`] holds line levels set by the caller. [`SimPorts`] holds the
//! three port registers and keeps a short history of committed frames, so a
//! test can check what the player would have seen.

use heapless::HistoryBuffer;

use crate::traits::{Channel, InputLines, OutputPorts, Port};

/// Number of committed frames kept by [`SimPorts`]
pub const FRAME_HISTORY: usize = 64;

/// Snapshot of the three ports after a render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub level: u8,
    pub action: u8,
    pub count: u8,
}

impl Frame {
    pub const fn new(level: u8, action: u8, count: u8) -> Self {
        Self {
            level,
            action,
            count,
        }
    }

    pub fn port(&self, port: Port) -> u8 {
        match port {
            Port::Level => self.level,
            Port::Action => self.action,
            Port::Count => self.count,
        }
    }
}

/// Input lines driven by the caller
#[derive(Debug, Clone, Default)]
pub struct SimLines {
    levels: [bool; 2],
}

impl SimLines {
    pub const fn new() -> Self {
        Self {
            levels: [false; 2],
        }
    }

    pub fn set(&mut self, channel: Channel, asserted: bool) {
        self.levels[channel.index()] = asserted;
    }

    pub fn press(&mut self, channel: Channel) {
        self.set(channel, true);
    }

    pub fn release(&mut self, channel: Channel) {
        self.set(channel, false);
    }
}

impl InputLines for SimLines {
    fn is_asserted(&self, channel: Channel) -> bool {
        self.levels[channel.index()]
    }
}

/// Port registers with a frame log
#[derive(Debug)]
pub struct SimPorts {
    registers: Frame,
    history: HistoryBuffer<Frame, FRAME_HISTORY>,
    commits: u32,
}

impl Default for SimPorts {
    fn default() -> Self {
        Self::new()
    }
}

impl SimPorts {
    pub fn new() -> Self {
        Self::with_registers(Frame::default())
    }

    /// Start with preset register contents, e.g. bits owned by other peripherals
    pub fn with_registers(registers: Frame) -> Self {
        Self {
            registers,
            history: HistoryBuffer::new(),
            commits: 0,
        }
    }

    /// Current register contents
    pub fn registers(&self) -> Frame {
        self.registers
    }

    /// Most recently committed frame
    pub fn last_frame(&self) -> Option<Frame> {
        self.history.recent().copied()
    }

    /// Committed frames, oldest first
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.history.oldest_ordered()
    }

    /// Total frames committed since creation
    pub fn commits(&self) -> u32 {
        self.commits
    }

    pub fn clear_history(&mut self) {
        self.history = HistoryBuffer::new();
    }
}

impl OutputPorts for SimPorts {
    fn write_masked(&mut self, port: Port, value: u8, mask: u8) {
        let register = match port {
            Port::Level => &mut self.registers.level,
            Port::Action => &mut self.registers.action,
            Port::Count => &mut self.registers.count,
        };
        *register = (*register & !mask) | (value & mask);
    }

    fn commit(&mut self) {
        self.history.write(self.registers);
        self.commits = self.commits.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_follow_caller() {
        let mut lines = SimLines::new();
        lines.press(Channel::Configure);
        assert!(lines.is_asserted(Channel::Configure));
        assert!(!lines.is_asserted(Channel::PortSelect));
        lines.release(Channel::Configure);
        assert!(!lines.is_asserted(Channel::Configure));
    }

    #[test]
    fn test_ports_log_committed_frames() {
        let mut ports = SimPorts::with_registers(Frame::new(0xA0, 0x00, 0x00));
        ports.write_masked(Port::Level, 0x03, 0x0F);
        assert_eq!(ports.last_frame(), None);

        ports.commit();
        assert_eq!(ports.last_frame(), Some(Frame::new(0xA3, 0, 0)));

        ports.write_masked(Port::Count, 0x01, 0xFF);
        ports.commit();
        assert_eq!(ports.frames().count(), 2);
        assert_eq!(ports.commits(), 2);

        ports.clear_history();
        assert_eq!(ports.last_frame(), None);
        assert_eq!(ports.registers().count, 0x01);
    }
}
