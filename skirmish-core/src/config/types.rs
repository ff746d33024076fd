//! Game limits and player choices
//!
//! Level and action are bounded by construction, so no task ever has to
//! range-check them.

/// Lowest selectable level
pub const MIN_LEVEL: u8 = 1;

/// Highest selectable level; the next press wraps to [`MIN_LEVEL`]
pub const MAX_LEVEL: u8 = 4;

/// Number of init ticks the power-on flash lasts
pub const INIT_REPEATS: u8 = 2;

/// Difficulty level, always within `MIN_LEVEL..=MAX_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Level(u8);

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl Level {
    pub const MIN: Level = Level(MIN_LEVEL);
    pub const MAX: Level = Level(MAX_LEVEL);

    /// Create a level, or `None` if out of range
    pub const fn new(value: u8) -> Option<Self> {
        if value >= MIN_LEVEL && value <= MAX_LEVEL {
            Some(Level(value))
        } else {
            None
        }
    }

    /// Raw level value
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next level, wrapping from `MAX` back to `MIN`
    pub const fn next(self) -> Self {
        if self.0 < MAX_LEVEL {
            Level(self.0 + 1)
        } else {
            Self::MIN
        }
    }
}

/// Player action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    #[default]
    Attack,
    Defend,
}

impl Action {
    /// The other action
    pub const fn toggled(self) -> Self {
        match self {
            Action::Attack => Action::Defend,
            Action::Defend => Action::Attack,
        }
    }

    /// Countdown start value for this action at `level`
    ///
    /// Defending takes twice as long as attacking.
    pub const fn countdown(self, level: Level) -> u8 {
        match self {
            Action::Attack => level.get(),
            Action::Defend => 2 * level.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::new(0), None);
        assert_eq!(Level::new(5), None);
        assert_eq!(Level::new(3).map(Level::get), Some(3));
    }

    #[test]
    fn test_level_wraps() {
        let mut level = Level::MIN;
        let mut seen = [0u8; 5];
        for slot in seen.iter_mut() {
            *slot = level.get();
            level = level.next();
        }
        assert_eq!(seen, [1, 2, 3, 4, 1]);
    }

    #[test]
    fn test_action_countdown() {
        let level = Level::new(3).unwrap();
        assert_eq!(Action::Attack.countdown(level), 3);
        assert_eq!(Action::Defend.countdown(level), 6);
        assert_eq!(Action::Defend.countdown(Level::MAX), 8);
    }

    #[test]
    fn test_action_toggle() {
        assert_eq!(Action::Attack.toggled(), Action::Defend);
        assert_eq!(Action::Defend.toggled().toggled(), Action::Defend);
    }
}
