//! Engine inputs and outputs.

use crate::time::TimeInstant;
use crate::types::{Direction, Player};
use heapless::Vec;

/// Upper bound on events produced by a single engine call.
pub const MAX_EVENTS: usize = 4;

/// Bounded list of events returned by engine operations.
pub type ClockEvents = Vec<ClockEvent, MAX_EVENTS>;

/// Something the outside world should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// Clock went from paused to running.
    RunStarted,
    /// Clock went from running to paused.
    RunPaused,
    /// Active player dropped to one minute.
    WarningOneMinute,
    /// Active player dropped to thirty seconds.
    WarningThirtySeconds,
    /// Active player entered the given second of the final five.
    FinalCountdownBeep(u8),
    /// The given player is now active.
    TurnChanged(Player),
    /// A clock reached zero.
    GameEnded { winner: Player },
}

/// Actions for driving the engine.
#[derive(Debug, Clone, Copy)]
pub enum ClockAction<I: TimeInstant> {
    /// Move through time options.
    SelectOption(Direction),
    /// Start a game with the selected option.
    ConfirmSetup(I),
    /// Start or pause the clock.
    ToggleRun(I),
    /// Debit elapsed time.
    Advance(I),
    /// End the opponent's turn.
    SwitchTurn(Player),
    /// Leave the game-over screen.
    Restart,
}
