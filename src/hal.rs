//! Hardware collaborator traits.
//!
//! Implement these for your board. None of the methods can fail: handle or
//! swallow bus errors inside the implementation, the clock keeps its own time
//! regardless of whether a peripheral responds.

use crate::types::{Button, Player};

/// Trait for reading the three clock buttons.
pub trait ButtonInput {
    /// Returns true while `button` is held down.
    ///
    /// Resolve electrical polarity here: an active-low line reads as pressed
    /// when the pin is low.
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Trait for a character display with at least two 16-column lines.
pub trait CharDisplay {
    /// Moves the cursor to `col` on line `row`.
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Writes text at the cursor.
    fn write_str(&mut self, text: &str);
}

/// Named buzzer patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BeepPattern {
    /// Single short burst.
    Start,
    /// Double short burst.
    Pause,
    /// Single longer burst.
    Warning,
    /// Short higher-pitched burst.
    FinalCountdown,
    /// Long burst at the flag.
    GameOver,
}

/// Trait for the piezo buzzer.
pub trait Buzzer {
    /// Plays `pattern`. May block for the pattern's length.
    fn play(&mut self, pattern: BeepPattern);
}

/// What the status LEDs should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    /// Light the given player's LED only.
    Active(Player),
    /// Both LEDs off.
    AllOff,
}

/// Trait for the per-player status LEDs.
pub trait StatusLeds {
    /// Applies `state`.
    fn set(&mut self, state: LedState);
}

/// For boards without status LEDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLeds;

impl StatusLeds for NoLeds {
    fn set(&mut self, _state: LedState) {}
}
