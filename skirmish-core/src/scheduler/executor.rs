//! Round-robin executor
//!
//! One round runs Timer, Input, Display and Game, in that order, to
//! completion. Every change a task makes is visible to the tasks after it in
//! the same round, and to the tasks before it in the next round.

use crate::config::Calibration;
use crate::display::Display;
use crate::game::{Game, Transition};
use crate::input::Inputs;
use crate::timer::Timer;
use crate::traits::{InputLines, OutputPorts};

/// What happened during one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundReport {
    /// Round number, starting at 1
    pub round: u32,
    /// Game state change made this round
    pub transition: Option<Transition>,
}

/// Round-robin scheduler over a board
#[derive(Debug)]
pub struct Scheduler<I, O> {
    lines: I,
    ports: O,
    timer: Timer,
    inputs: Inputs,
    display: Display,
    game: Game,
    rounds: u32,
}

impl<I: InputLines, O: OutputPorts> Scheduler<I, O> {
    /// Create a scheduler with every task in its initial state
    pub fn new(lines: I, ports: O, calibration: Calibration) -> Self {
        Self {
            lines,
            ports,
            timer: Timer::new(),
            inputs: Inputs::new(),
            display: Display::new(calibration.blink_ticks),
            game: Game::new(calibration),
            rounds: 0,
        }
    }

    /// Run one turn of each task
    pub fn round(&mut self) -> RoundReport {
        self.timer.advance();
        self.inputs.advance(&self.lines);
        self.display.advance(&mut self.timer, &mut self.ports);
        let transition = self
            .game
            .advance(&mut self.timer, &mut self.inputs, &mut self.display);

        self.rounds = self.rounds.wrapping_add(1);
        RoundReport {
            round: self.rounds,
            transition,
        }
    }

    /// Run `count` rounds
    pub fn run_rounds(&mut self, count: u32) {
        for _ in 0..count {
            self.round();
        }
    }

    /// Run forever, handing every round's report to `observe`
    ///
    /// `observe` runs between rounds, so it adds to the loop period and
    /// must stay short.
    pub fn run_with<F: FnMut(&RoundReport)>(&mut self, mut observe: F) -> ! {
        loop {
            let report = self.round();
            observe(&report);
        }
    }

    /// Run forever
    pub fn run(&mut self) -> ! {
        self.run_with(|_| {})
    }

    /// Rounds completed so far
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn lines(&self) -> &I {
        &self.lines
    }

    /// Input lines, e.g. to drive a simulated board
    pub fn lines_mut(&mut self) -> &mut I {
        &mut self.lines
    }

    pub fn ports(&self) -> &O {
        &self.ports
    }

    pub fn ports_mut(&mut self) -> &mut O {
        &mut self.ports
    }
}
