//! Iteration-counted timer task
//!
//! The timer counts scheduler rounds, never wall-clock time. A run of
//! `repeats` ticks of `tick_duration` rounds each finishes after
//! `repeats * tick_duration` calls to [`Timer::advance`].
//!
//! There is a single timer in the system. Display uses it for blinking
//! while the game is idle on input; the game uses it for the power-on
//! flash and the countdown.

/// Timer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerState {
    /// Not counting; a start request is picked up on the next advance
    Idle,
    /// Counting rounds
    Running,
    /// Run finished; held until `start` or `abort`
    Done,
}

/// Round-counting timer
#[derive(Debug, Clone)]
pub struct Timer {
    state: TimerState,
    start_requested: bool,
    /// Rounds elapsed within the current tick
    elapsed: u32,
    tick_duration: u32,
    repeats_left: u8,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create an idle timer
    pub const fn new() -> Self {
        Self {
            state: TimerState::Idle,
            start_requested: false,
            elapsed: 0,
            tick_duration: 1,
            repeats_left: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == TimerState::Idle
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_done(&self) -> bool {
        self.state == TimerState::Done
    }

    /// Ticks left in the current run
    pub fn remaining(&self) -> u8 {
        self.repeats_left
    }

    /// Request a run of `repeats` ticks, `tick_duration` rounds each
    ///
    /// Any run in progress is dropped. The run starts on the next
    /// [`advance`](Self::advance). A zero `tick_duration` counts as one.
    pub fn start(&mut self, repeats: u8, tick_duration: u32) {
        self.repeats_left = repeats;
        self.tick_duration = tick_duration.max(1);
        self.elapsed = 0;
        self.start_requested = true;
        self.state = TimerState::Idle;
    }

    /// Stop the current run and drop any pending start
    pub fn abort(&mut self) {
        self.start_requested = false;
        self.state = TimerState::Idle;
    }

    /// Timer task body, called once per round
    pub fn advance(&mut self) {
        match self.state {
            TimerState::Idle => self.advance_idle(),
            TimerState::Running => self.advance_running(),
            TimerState::Done => {}
        }
    }

    fn advance_idle(&mut self) {
        if !self.start_requested {
            return;
        }
        self.start_requested = false;
        self.elapsed = 0;

        if self.repeats_left == 0 {
            self.state = TimerState::Done;
            return;
        }

        // The arming round is the first counted round of the run
        self.state = TimerState::Running;
        self.advance_running();
    }

    fn advance_running(&mut self) {
        self.elapsed += 1;
        if self.elapsed < self.tick_duration {
            return;
        }
        self.elapsed = 0;
        self.repeats_left = self.repeats_left.saturating_sub(1);
        if self.repeats_left == 0 {
            self.state = TimerState::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rounds_until_done(timer: &mut Timer, limit: u32) -> Option<u32> {
        for round in 1..=limit {
            timer.advance();
            if timer.is_done() {
                return Some(round);
            }
        }
        None
    }

    #[test]
    fn test_new_timer_is_idle() {
        let mut timer = Timer::new();
        assert!(timer.is_idle());
        timer.advance();
        assert!(timer.is_idle());
    }

    #[test]
    fn test_single_tick() {
        let mut timer = Timer::new();
        timer.start(1, 1);
        assert!(timer.is_idle());
        timer.advance();
        assert!(timer.is_done());
    }

    #[test]
    fn test_two_ticks_of_three() {
        let mut timer = Timer::new();
        timer.start(2, 3);
        assert_eq!(rounds_until_done(&mut timer, 100), Some(6));
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn test_done_is_held() {
        let mut timer = Timer::new();
        timer.start(1, 2);
        rounds_until_done(&mut timer, 10);
        for _ in 0..10 {
            timer.advance();
            assert!(timer.is_done());
        }
    }

    #[test]
    fn test_zero_repeats_done_on_first_advance() {
        let mut timer = Timer::new();
        timer.start(0, 1000);
        timer.advance();
        assert!(timer.is_done());
    }

    #[test]
    fn test_zero_duration_counts_as_one() {
        let mut timer = Timer::new();
        timer.start(3, 0);
        assert_eq!(rounds_until_done(&mut timer, 10), Some(3));
    }

    #[test]
    fn test_restart_while_running() {
        let mut timer = Timer::new();
        timer.start(1, 10);
        for _ in 0..7 {
            timer.advance();
        }
        assert!(timer.is_running());

        timer.start(1, 4);
        assert!(timer.is_idle());
        assert_eq!(rounds_until_done(&mut timer, 100), Some(4));
    }

    #[test]
    fn test_abort_drops_pending_start() {
        let mut timer = Timer::new();
        timer.start(1, 1);
        timer.abort();
        for _ in 0..5 {
            timer.advance();
            assert!(timer.is_idle());
        }
    }

    proptest! {
        #[test]
        fn prop_done_after_exactly_repeats_times_duration(repeats in 1u8..=6, duration in 1u32..=40) {
            let mut timer = Timer::new();
            timer.start(repeats, duration);
            let total = u32::from(repeats) * duration;
            for _ in 1..total {
                timer.advance();
                prop_assert!(!timer.is_done());
            }
            timer.advance();
            prop_assert!(timer.is_done());
        }

        #[test]
        fn prop_abort_then_start_rearms(prior in 0u32..50, repeats in 1u8..=4, duration in 1u32..=10) {
            let mut timer = Timer::new();
            timer.start(2, 7);
            for _ in 0..prior {
                timer.advance();
            }
            timer.abort();
            prop_assert!(timer.is_idle());

            timer.start(repeats, duration);
            let total = u32::from(repeats) * duration;
            prop_assert_eq!(rounds_until_done(&mut timer, total + 5), Some(total));
        }
    }
}
