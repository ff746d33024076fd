//! Display task
//!
//! Keeps the three port patterns derived from the game choices and writes
//! them out. At most one port blinks at a time; blinking borrows the shared
//! [`Timer`] one tick at a time.
//!
//! A pattern or blink change is rendered on the very next round, fully
//! visible, and restarts the blink cycle from the visible half.

use crate::config::{Action, Level};
use crate::timer::{Timer, TimerState};
use crate::traits::{OutputPorts, Port};

/// Which port, if any, is blinking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkMode {
    #[default]
    None,
    /// Level port blinks while the level is being chosen
    Level,
    /// Action port blinks while the action is being chosen
    Action,
}

impl BlinkMode {
    /// The blinking port
    pub const fn port(self) -> Option<Port> {
        match self {
            BlinkMode::None => None,
            BlinkMode::Level => Some(Port::Level),
            BlinkMode::Action => Some(Port::Action),
        }
    }
}

/// Bit patterns for the three ports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Patterns {
    pub level: u8,
    pub action: u8,
    pub count: u8,
}

impl Patterns {
    /// Derive port patterns from the game choices
    ///
    /// - level: a bar of `level` LEDs from bit 0
    /// - action: bit 0 for attack, bit 1 for defend
    /// - count: all clear at zero, otherwise bit 0 plus `count - 1` LEDs
    ///   above it, so a count of one is still visible
    pub fn derive(level: Level, action: Action, count: u8) -> Self {
        Self {
            level: bar(level.get()),
            action: match action {
                Action::Attack => 0b01,
                Action::Defend => 0b10,
            },
            count: count_bar(count),
        }
    }

    pub fn get(&self, port: Port) -> u8 {
        match port {
            Port::Level => self.level,
            Port::Action => self.action,
            Port::Count => self.count,
        }
    }
}

/// `len` set bits from bit 0, saturating at eight
fn bar(len: u8) -> u8 {
    if len >= 8 {
        0xFF
    } else {
        (1u8 << len) - 1
    }
}

fn count_bar(count: u8) -> u8 {
    match count {
        0 => 0,
        n => (bar(n - 1) << 1) | 1,
    }
}

/// Display task state
#[derive(Debug, Clone)]
pub struct Display {
    patterns: Patterns,
    blink: BlinkMode,
    /// Blinking port is in its dark half
    hidden: bool,
    /// Every port shows its full mask, overriding the patterns
    all_on: bool,
    update_pending: bool,
    blink_ticks: u32,
}

impl Display {
    /// Create a display showing the default choices
    ///
    /// The first advance renders them.
    pub fn new(blink_ticks: u32) -> Self {
        Self {
            patterns: Patterns::derive(Level::default(), Action::default(), 0),
            blink: BlinkMode::None,
            hidden: false,
            all_on: false,
            update_pending: true,
            blink_ticks,
        }
    }

    pub fn patterns(&self) -> Patterns {
        self.patterns
    }

    pub fn blink(&self) -> BlinkMode {
        self.blink
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_update_pending(&self) -> bool {
        self.update_pending
    }

    /// Show new game choices
    pub fn set_pattern(&mut self, level: Level, action: Action, count: u8) {
        self.patterns = Patterns::derive(level, action, count);
        self.all_on = false;
        self.update_pending = true;
    }

    /// Select the blinking port, starting from the visible half
    pub fn set_blink(&mut self, mode: BlinkMode) {
        self.blink = mode;
        self.hidden = false;
        self.all_on = false;
        self.update_pending = true;
    }

    /// Light every LED until the next pattern or blink change
    pub fn show_all_on(&mut self) {
        self.all_on = true;
        self.update_pending = true;
    }

    /// Value a port shows right now
    pub fn port_value(&self, port: Port) -> u8 {
        if self.all_on {
            port.mask()
        } else if self.hidden && self.blink.port() == Some(port) {
            0
        } else {
            self.patterns.get(port)
        }
    }

    /// Display task body, called once per round
    pub fn advance<O: OutputPorts>(&mut self, timer: &mut Timer, ports: &mut O) {
        if self.update_pending {
            self.hidden = false;
            self.render(ports);
            self.update_pending = false;
            if self.blink != BlinkMode::None {
                // A fresh frame restarts the blink cycle
                timer.abort();
            }
            return;
        }

        if self.blink == BlinkMode::None {
            return;
        }

        match timer.state() {
            TimerState::Done => {
                self.hidden = !self.hidden;
                timer.start(1, self.blink_ticks);
                self.render(ports);
            }
            TimerState::Idle => {
                self.hidden = false;
                timer.start(1, self.blink_ticks);
                self.render(ports);
            }
            TimerState::Running => {}
        }
    }

    fn render<O: OutputPorts>(&self, ports: &mut O) {
        for port in Port::ALL {
            ports.write_masked(port, self.port_value(port), port.mask());
        }
        ports.commit();
    }
}
