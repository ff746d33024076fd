//! Game state machine
//!
//! Each state has its own handler that reads the inputs and the timer, issues
//! commands to the display and the timer, and returns the next state.

use crate::config::{Action, Calibration, Level, INIT_REPEATS};
use crate::display::{BlinkMode, Display};
use crate::input::Inputs;
use crate::timer::Timer;
use crate::traits::Channel;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Power-on: light everything and start the flash timer
    Init,
    /// Waiting for the power-on flash to finish
    InitWait,
    /// Showing the defaults, waiting for the player to begin
    Start,
    /// Choosing the level; the level port blinks
    Level,
    /// Choosing the action; the action port blinks
    Action,
    /// Counting down one step per countdown tick
    Countdown,
    /// Showing the cleared countdown before starting over
    End,
}

impl GameState {
    /// States that react to the input lines
    pub fn accepts_input(&self) -> bool {
        matches!(self, GameState::Start | GameState::Level | GameState::Action)
    }

    /// States that wait on the timer
    pub fn awaits_timer(&self) -> bool {
        matches!(
            self,
            GameState::InitWait | GameState::Countdown | GameState::End
        )
    }
}

/// A state change made by one game turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
}

/// Game task state
///
/// The game is the only writer of its fields.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    level: Level,
    action: Action,
    count: u8,
    calibration: Calibration,
}

impl Game {
    pub fn new(calibration: Calibration) -> Self {
        Self {
            state: GameState::Init,
            level: Level::default(),
            action: Action::default(),
            count: 0,
            calibration,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Current countdown value
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Game task body, called once per round
    ///
    /// Returns the state change, if this turn made one.
    pub fn advance(
        &mut self,
        timer: &mut Timer,
        inputs: &mut Inputs,
        display: &mut Display,
    ) -> Option<Transition> {
        let from = self.state;
        let to = match from {
            GameState::Init => self.on_init(timer, display),
            GameState::InitWait => self.on_init_wait(timer, inputs, display),
            GameState::Start => self.on_start(inputs, display),
            GameState::Level => self.on_level(inputs, display),
            GameState::Action => self.on_action(timer, inputs, display),
            GameState::Countdown => self.on_countdown(timer, display),
            GameState::End => self.on_end(timer, inputs, display),
        };
        self.state = to;

        (from != to).then_some(Transition { from, to })
    }

    fn show(&self, display: &mut Display) {
        display.set_pattern(self.level, self.action, self.count);
    }

    fn on_init(&mut self, timer: &mut Timer, display: &mut Display) -> GameState {
        self.show(display);
        display.show_all_on();
        timer.start(INIT_REPEATS, self.calibration.init_ticks);
        GameState::InitWait
    }

    fn on_init_wait(
        &mut self,
        timer: &mut Timer,
        inputs: &mut Inputs,
        display: &mut Display,
    ) -> GameState {
        if !timer.is_done() {
            return GameState::InitWait;
        }
        display.set_blink(BlinkMode::None);
        inputs.reset_all();
        GameState::Start
    }

    fn on_start(&mut self, inputs: &mut Inputs, display: &mut Display) -> GameState {
        if !inputs.has_pulse(Channel::PortSelect) {
            return GameState::Start;
        }
        inputs.reset(Channel::PortSelect);
        display.set_blink(BlinkMode::Level);
        GameState::Level
    }

    fn on_level(&mut self, inputs: &mut Inputs, display: &mut Display) -> GameState {
        let mut next = GameState::Level;

        if inputs.has_pulse(Channel::PortSelect) {
            inputs.reset(Channel::PortSelect);
            display.set_blink(BlinkMode::Action);
            next = GameState::Action;
        }

        // Checked even when leaving, so a press in the same round is not lost
        if inputs.has_pulse(Channel::Configure) {
            inputs.reset(Channel::Configure);
            self.level = self.level.next();
            self.show(display);
        }

        next
    }

    fn on_action(
        &mut self,
        timer: &mut Timer,
        inputs: &mut Inputs,
        display: &mut Display,
    ) -> GameState {
        let mut next = GameState::Action;

        if inputs.has_pulse(Channel::PortSelect) {
            inputs.reset(Channel::PortSelect);
            display.set_blink(BlinkMode::None);
            self.count = self.action.countdown(self.level);
            self.show(display);
            timer.start(1, self.calibration.blink_ticks);
            next = GameState::Countdown;
        }

        if inputs.has_pulse(Channel::Configure) {
            inputs.reset(Channel::Configure);
            self.action = self.action.toggled();
            self.show(display);
        }

        next
    }

    fn on_countdown(&mut self, timer: &mut Timer, display: &mut Display) -> GameState {
        if !timer.is_done() {
            return GameState::Countdown;
        }

        self.count = self.count.saturating_sub(1);
        self.show(display);
        timer.start(1, self.calibration.countdown_ticks);

        if self.count == 0 {
            GameState::End
        } else {
            GameState::Countdown
        }
    }

    fn on_end(&mut self, timer: &mut Timer, inputs: &mut Inputs, display: &mut Display) -> GameState {
        if !timer.is_done() {
            return GameState::End;
        }
        self.level = Level::default();
        self.action = Action::default();
        self.count = 0;
        self.show(display);
        display.set_blink(BlinkMode::None);
        inputs.reset_all();
        GameState::Start
    }
}
