//! Two-player clock state machine.
//!
//! Provides [`ClockEngine`], which owns the authoritative game state and turns
//! elapsed time into per-player deductions. The engine never touches hardware;
//! it receives instants and returns [`ClockEvent`]s for the caller to render.

use crate::event::{ClockAction, ClockEvent, ClockEvents};
use crate::options::{DEFAULT_OPTION_COUNT, TimeOptions, TimeOptionsBuilder};
use crate::time::{TimeInstant, millis_since};
use crate::types::{ConfigError, Direction, GameMode, Player, TimeOption};
use crate::warning::WarningState;
use core::marker::PhantomData;

/// Errors that can occur during engine operations.
///
/// An operation that returns an error has not changed any engine state. Button
/// handlers are expected to discard these: a press in the wrong mode is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// Operation called from an invalid mode.
    InvalidMode {
        /// Human-readable description of valid mode(s), e.g. "Paused or Running"
        expected: &'static str,
        /// The actual current mode
        actual: GameMode,
    },
}

impl core::fmt::Display for ClockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ClockError::InvalidMode { expected, actual } => {
                write!(
                    f,
                    "invalid mode: expected {}, but clock is in {:?}",
                    expected, actual
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ClockError {}

/// Chess clock for two players.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Maximum number of time options
pub struct ClockEngine<I: TimeInstant, const N: usize = DEFAULT_OPTION_COUNT> {
    mode: GameMode,
    options: TimeOptions<N>,
    clocks: [u64; 2],
    active: Player,
    warnings: WarningState,
    last_update: Option<I>,
    winner: Option<Player>,
}

impl<I: TimeInstant> ClockEngine<I, DEFAULT_OPTION_COUNT> {
    /// Creates an engine in `Setup` with the standard 2/10/30/60 minute options.
    pub fn new() -> Self {
        Self::with_options(TimeOptions::default())
    }
}

impl<I: TimeInstant> Default for ClockEngine<I, DEFAULT_OPTION_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: TimeInstant, const N: usize> ClockEngine<I, N> {
    /// Creates a builder for an engine with a custom option set.
    pub fn builder() -> ClockEngineBuilder<I, N> {
        ClockEngineBuilder::new()
    }

    /// Creates an engine in `Setup` offering `options`.
    pub fn with_options(options: TimeOptions<N>) -> Self {
        let start = options.selected().as_millis();

        Self {
            mode: GameMode::Setup,
            options,
            clocks: [start; 2],
            active: Player::White,
            warnings: WarningState::new(),
            last_update: None,
            winner: None,
        }
    }

    /// Handles an action by dispatching to the matching operation.
    ///
    /// Operations that produce at most one event return it as a one-element
    /// list so every action has the same result shape.
    pub fn handle_action(&mut self, action: ClockAction<I>) -> Result<ClockEvents, ClockError> {
        let mut events = ClockEvents::new();

        match action {
            ClockAction::SelectOption(direction) => {
                self.select_time_option(direction)?;
            }
            ClockAction::ConfirmSetup(now) => self.confirm_setup(now)?,
            ClockAction::ToggleRun(now) => {
                let _ = events.push(self.toggle_run(now)?);
            }
            ClockAction::Advance(now) => return self.advance(now),
            ClockAction::SwitchTurn(player) => {
                if let Some(event) = self.switch_turn(player)? {
                    let _ = events.push(event);
                }
            }
            ClockAction::Restart => self.request_restart()?,
        }

        Ok(events)
    }

    /// Moves the time option cursor, wrapping at either end.
    ///
    /// Must be called from `Setup`. Clocks are not touched until
    /// [`confirm_setup`](Self::confirm_setup).
    pub fn select_time_option(&mut self, direction: Direction) -> Result<TimeOption, ClockError> {
        self.require(GameMode::Setup, "Setup")?;

        let option = self.options.select(direction);
        #[cfg(feature = "defmt")]
        defmt::debug!("time option selected: {}s", option.as_secs());
        Ok(option)
    }

    /// Starts a new game with the selected time option.
    ///
    /// Must be called from `Setup`. Both clocks are set to the selected
    /// duration, White is active, warnings are re-armed and the engine waits
    /// in `Paused` for the first control press.
    pub fn confirm_setup(&mut self, now: I) -> Result<(), ClockError> {
        self.require(GameMode::Setup, "Setup")?;

        let start = self.options.selected().as_millis();
        self.clocks = [start; 2];
        self.active = Player::White;
        self.warnings.clear();
        self.winner = None;
        self.last_update = Some(now);
        self.mode = GameMode::Paused;

        #[cfg(feature = "defmt")]
        defmt::debug!("game confirmed: {}ms per player", start);
        Ok(())
    }

    /// Starts a paused clock or pauses a running one.
    ///
    /// Must be called from `Paused` or `Running`. Starting resets the
    /// reference instant to `now`, so time spent paused is never debited.
    /// Pausing does not debit; call [`advance`](Self::advance) first.
    pub fn toggle_run(&mut self, now: I) -> Result<ClockEvent, ClockError> {
        match self.mode {
            GameMode::Paused => {
                self.last_update = Some(now);
                self.mode = GameMode::Running;
                #[cfg(feature = "defmt")]
                defmt::debug!("clock running, {} to move", self.active);
                Ok(ClockEvent::RunStarted)
            }
            GameMode::Running => {
                self.mode = GameMode::Paused;
                #[cfg(feature = "defmt")]
                defmt::debug!("clock paused");
                Ok(ClockEvent::RunPaused)
            }
            actual => Err(ClockError::InvalidMode {
                expected: "Paused or Running",
                actual,
            }),
        }
    }

    /// Debits the time elapsed since the last update from the active player.
    ///
    /// Must be called from `Running`, as often as possible. Calling twice with
    /// the same `now` debits nothing the second time.
    ///
    /// # Returns
    /// Threshold notifications crossed by the active player, or a single
    /// `GameEnded` if their clock reached zero. Reaching zero moves the engine
    /// to `GameOver`, which freezes both clocks.
    ///
    /// A tick that reaches zero reports only `GameEnded`: warnings and
    /// countdown beeps crossed on that same tick are not emitted.
    pub fn advance(&mut self, now: I) -> Result<ClockEvents, ClockError> {
        self.require(GameMode::Running, "Running")?;

        let elapsed = match self.last_update {
            Some(last) => millis_since(now, last),
            None => 0,
        };
        self.last_update = Some(now);

        let clock = &mut self.clocks[self.active.index()];
        *clock = clock.saturating_sub(elapsed);
        let remaining = *clock;

        let mut events = ClockEvents::new();

        if remaining == 0 {
            let winner = self.active.opponent();
            self.winner = Some(winner);
            self.mode = GameMode::GameOver;
            #[cfg(feature = "defmt")]
            defmt::info!("{} flagged, {} wins", self.active, winner);
            let _ = events.push(ClockEvent::GameEnded { winner });
            return Ok(events);
        }

        self.warnings.evaluate(remaining, &mut events);

        #[cfg(feature = "defmt")]
        for event in &events {
            defmt::debug!("{} at {}ms: {}", self.active, remaining, event);
        }

        Ok(events)
    }

    /// Hands the move to `requested_by`.
    ///
    /// Must be called from `Running`. Only the waiting player's button
    /// switches the turn; a press by the player already on move is ignored
    /// and returns `Ok(None)`. Warnings are not re-armed.
    pub fn switch_turn(&mut self, requested_by: Player) -> Result<Option<ClockEvent>, ClockError> {
        self.require(GameMode::Running, "Running")?;

        if requested_by == self.active {
            return Ok(None);
        }

        self.active = requested_by;
        #[cfg(feature = "defmt")]
        defmt::trace!("turn: {}", requested_by);
        Ok(Some(ClockEvent::TurnChanged(requested_by)))
    }

    /// Leaves `GameOver` for `Setup`.
    ///
    /// Clocks keep their final values until the next game is confirmed.
    pub fn request_restart(&mut self) -> Result<(), ClockError> {
        self.require(GameMode::GameOver, "GameOver")?;

        self.mode = GameMode::Setup;
        #[cfg(feature = "defmt")]
        defmt::debug!("back to setup");
        Ok(())
    }

    /// Returns the current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the player on move.
    pub fn active(&self) -> Player {
        self.active
    }

    /// Returns a player's remaining time in milliseconds.
    pub fn remaining(&self, player: Player) -> u64 {
        self.clocks[player.index()]
    }

    /// Returns the winner of the last finished game, if any.
    ///
    /// Cleared when the next game is confirmed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the option that the next confirmed game will use.
    pub fn selected_option(&self) -> TimeOption {
        self.options.selected()
    }

    /// Returns the option set.
    pub fn options(&self) -> &TimeOptions<N> {
        &self.options
    }

    /// Returns the warning flags of the current game.
    pub fn warnings(&self) -> &WarningState {
        &self.warnings
    }

    /// Returns true if the active clock is being debited.
    pub fn is_running(&self) -> bool {
        self.mode == GameMode::Running
    }

    /// Returns true if a game is set up but not ticking.
    pub fn is_paused(&self) -> bool {
        self.mode == GameMode::Paused
    }

    fn require(&self, mode: GameMode, expected: &'static str) -> Result<(), ClockError> {
        if self.mode != mode {
            return Err(ClockError::InvalidMode {
                expected,
                actual: self.mode,
            });
        }
        Ok(())
    }
}

/// Builder for a [`ClockEngine`] with a validated custom option set.
///
/// Validation is that of [`TimeOptionsBuilder`].
#[derive(Debug)]
pub struct ClockEngineBuilder<I: TimeInstant, const N: usize> {
    options: TimeOptionsBuilder<N>,
    _instant: PhantomData<I>,
}

impl<I: TimeInstant, const N: usize> ClockEngineBuilder<I, N> {
    /// Creates a builder with no options.
    pub fn new() -> Self {
        Self {
            options: TimeOptionsBuilder::new(),
            _instant: PhantomData,
        }
    }

    /// Appends an option.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` options were added
    pub fn option(mut self, option: TimeOption) -> Result<Self, ConfigError> {
        self.options = self.options.option(option)?;
        Ok(self)
    }

    /// Sets which option is selected when the engine powers on.
    pub fn default_index(mut self, index: usize) -> Self {
        self.options = self.options.default_index(index);
        self
    }

    /// Validates the option set and builds an engine in `Setup`.
    pub fn build(self) -> Result<ClockEngine<I, N>, ConfigError> {
        Ok(ClockEngine::with_options(self.options.build()?))
    }
}

impl<I: TimeInstant, const N: usize> Default for ClockEngineBuilder<I, N> {
    fn default() -> Self {
        Self::new()
    }
}
