//! Core types shared by the engine and the dispatcher.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    /// Moves first; active when a game is confirmed.
    White,

    /// Moves second.
    Black,
}

impl Player {
    /// Both players, in clock-array order.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Index of this player's clock.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    /// Short label used on the display.
    pub fn label(self) -> &'static str {
        match self {
            Player::White => "White",
            Player::Black => "Black",
        }
    }
}

/// The mode of the clock engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameMode {
    /// Choosing a time control. Clocks are not ticking.
    Setup,
    /// Game confirmed but no clock is being debited.
    Paused,
    /// The active player's clock is being debited.
    Running,
    /// A clock reached zero. Waits here until a restart is requested.
    GameOver,
}

/// Which way to move through the time options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards the previous option, wrapping to the last.
    Previous,
    /// Towards the next option, wrapping to the first.
    Next,
}

/// A selectable starting time for both players, in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOption(u32);

impl TimeOption {
    /// Longest option a two-digit "MM:SS" display can show (99:59).
    pub const MAX_SECS: u32 = 99 * 60 + 59;

    /// Creates an option from a number of seconds.
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Creates an option from a number of whole minutes.
    ///
    /// Saturates at `u32::MAX` seconds; the option set builder rejects
    /// anything above [`MAX_SECS`](Self::MAX_SECS).
    #[inline]
    pub const fn from_mins(mins: u32) -> Self {
        Self(mins.saturating_mul(60))
    }

    /// Duration in seconds.
    #[inline]
    pub fn as_secs(self) -> u32 {
        self.0
    }

    /// Duration in milliseconds, the unit player clocks are kept in.
    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 as u64 * 1000
    }
}

/// A physical push-button on the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// White's turn button.
    White,
    /// Black's turn button.
    Black,
    /// Start/pause, confirm and restart.
    Control,
}

impl Button {
    /// All buttons in polling order.
    pub const ALL: [Button; 3] = [Button::White, Button::Black, Button::Control];

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Button::White => 0,
            Button::Black => 1,
            Button::Control => 2,
        }
    }

    /// The player this button belongs to, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Button::White => Some(Player::White),
            Button::Black => Some(Player::Black),
            Button::Control => None,
        }
    }
}

/// Time option set validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No options provided.
    NoOptions,

    /// An option of zero seconds.
    ZeroDurationOption,

    /// An option longer than the display can show.
    OptionTooLong { secs: u32 },

    /// Default index does not name an option.
    DefaultIndexOutOfRange { index: usize, len: usize },

    /// Option set capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoOptions => {
                write!(f, "time option set must have at least one option")
            }
            ConfigError::ZeroDurationOption => {
                write!(f, "time options must be longer than zero seconds")
            }
            ConfigError::OptionTooLong { secs } => {
                write!(
                    f,
                    "time option of {}s exceeds the {}s display limit",
                    secs,
                    TimeOption::MAX_SECS
                )
            }
            ConfigError::DefaultIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "default option index {} is out of range for {} options",
                    index, len
                )
            }
            ConfigError::CapacityExceeded => {
                write!(f, "time option capacity exceeded")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_an_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn clock_indices_are_distinct() {
        assert_eq!(Player::White.index(), 0);
        assert_eq!(Player::Black.index(), 1);
    }

    #[test]
    fn time_option_converts_to_millis() {
        assert_eq!(TimeOption::from_secs(120).as_millis(), 120_000);
        assert_eq!(TimeOption::from_mins(60).as_secs(), 3600);
    }

    #[test]
    fn huge_minute_count_saturates() {
        assert_eq!(TimeOption::from_mins(u32::MAX).as_secs(), u32::MAX);
        assert_eq!(TimeOption::from_mins(99).as_secs(), 5940);
    }

    #[test]
    fn only_turn_buttons_belong_to_players() {
        assert_eq!(Button::White.player(), Some(Player::White));
        assert_eq!(Button::Black.player(), Some(Player::Black));
        assert_eq!(Button::Control.player(), None);
    }
}
