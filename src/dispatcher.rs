//! Glue between the clock engine and the board.
//!
//! Provides [`EventDispatcher`], which owns a [`ClockEngine`] and the hardware
//! collaborators, polls and debounces the buttons, maps presses to engine
//! operations according to the current mode, and renders the resulting
//! events. All game rules live in the engine; the dispatcher only forwards.

use crate::debounce::Debouncer;
use crate::display::{LINE_WIDTH, Screen};
use crate::engine::{ClockEngine, ClockError};
use crate::event::{ClockAction, ClockEvent, ClockEvents};
use crate::hal::{BeepPattern, ButtonInput, Buzzer, CharDisplay, LedState, StatusLeds};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{Button, Direction, GameMode};
use crate::warning::FINAL_COUNTDOWN_MS;

/// Dispatcher timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatcherConfig<D> {
    /// Minimum time between accepted presses of one button.
    pub debounce: D,
    /// Re-fire interval for a held button, if any.
    pub hold_repeat: Option<D>,
    /// Suggested delay between polls.
    pub poll_interval: D,
    /// Suggested delay between polls during the final countdown.
    pub countdown_poll_interval: D,
}

impl<D: TimeDuration> Default for DispatcherConfig<D> {
    fn default() -> Self {
        Self {
            debounce: D::from_millis(200),
            hold_repeat: None,
            poll_interval: D::from_millis(50),
            countdown_poll_interval: D::from_millis(10),
        }
    }
}

/// Drives a [`ClockEngine`] from buttons and renders it to the board.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `K` - Button input implementation type
/// * `D` - Display implementation type
/// * `Z` - Buzzer implementation type
/// * `L` - Status LED implementation type (use [`NoLeds`](crate::hal::NoLeds) if absent)
/// * `N` - Maximum number of time options
pub struct EventDispatcher<'t, I, T, K, D, Z, L, const N: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    K: ButtonInput,
    D: CharDisplay,
    Z: Buzzer,
    L: StatusLeds,
{
    engine: ClockEngine<I, N>,
    time_source: &'t T,
    buttons: K,
    display: D,
    buzzer: Z,
    leds: L,
    debouncers: [Debouncer<I>; 3],
    config: DispatcherConfig<I::Duration>,
    shown: Option<Screen>,
}

impl<'t, I, T, K, D, Z, L, const N: usize> EventDispatcher<'t, I, T, K, D, Z, L, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    K: ButtonInput,
    D: CharDisplay,
    Z: Buzzer,
    L: StatusLeds,
{
    /// Creates a dispatcher with default timing.
    ///
    /// LEDs are switched off; the display is drawn on the first poll.
    pub fn new(
        engine: ClockEngine<I, N>,
        time_source: &'t T,
        buttons: K,
        display: D,
        buzzer: Z,
        leds: L,
    ) -> Self {
        Self::with_config(
            engine,
            time_source,
            buttons,
            display,
            buzzer,
            leds,
            DispatcherConfig::default(),
        )
    }

    /// Creates a dispatcher with explicit timing.
    pub fn with_config(
        engine: ClockEngine<I, N>,
        time_source: &'t T,
        buttons: K,
        display: D,
        buzzer: Z,
        mut leds: L,
        config: DispatcherConfig<I::Duration>,
    ) -> Self {
        leds.set(LedState::AllOff);

        let debouncer = || -> Debouncer<I> {
            match config.hold_repeat {
                Some(repeat) => Debouncer::with_hold_repeat(config.debounce, repeat),
                None => Debouncer::new(config.debounce),
            }
        };

        Self {
            engine,
            time_source,
            buttons,
            display,
            buzzer,
            leds,
            debouncers: [debouncer(), debouncer(), debouncer()],
            config,
            shown: None,
        }
    }

    /// Runs one control cycle.
    ///
    /// Settles elapsed time, handles any accepted button presses, renders the
    /// resulting events and redraws display lines that changed.
    ///
    /// # Returns
    /// How long to wait before polling again.
    pub fn poll(&mut self) -> I::Duration {
        let now = self.time_source.now();

        if self.engine.is_running() {
            if let Ok(events) = self.engine.advance(now) {
                self.render_events(&events);
            }
        }

        for button in Button::ALL {
            let pressed = self.buttons.is_pressed(button);
            if self.debouncers[button.index()].update(pressed, now) {
                self.handle_press(button, now);
            }
        }

        self.refresh_display();
        self.next_poll_delay()
    }

    /// Routes an accepted press to the engine.
    ///
    /// Presses that mean nothing in the current mode are dropped.
    pub fn handle_press(&mut self, button: Button, now: I) {
        let Some(action) = self.action_for(button, now) else {
            #[cfg(feature = "defmt")]
            defmt::trace!("{} ignored in {}", button, self.engine.mode());
            return;
        };

        match self.engine.handle_action(action) {
            Ok(events) => {
                self.render_events(&events);
                self.render_mode_entry(action);
            }
            Err(ClockError::InvalidMode { .. }) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("{} ignored in {}", button, self.engine.mode());
            }
        }
    }

    fn action_for(&self, button: Button, now: I) -> Option<ClockAction<I>> {
        match (self.engine.mode(), button) {
            (GameMode::Setup, Button::White) => Some(ClockAction::SelectOption(Direction::Previous)),
            (GameMode::Setup, Button::Black) => Some(ClockAction::SelectOption(Direction::Next)),
            (GameMode::Setup, Button::Control) => Some(ClockAction::ConfirmSetup(now)),
            (GameMode::Paused | GameMode::Running, Button::Control) => {
                Some(ClockAction::ToggleRun(now))
            }
            (GameMode::Running, _) => button.player().map(ClockAction::SwitchTurn),
            (GameMode::GameOver, Button::Control) => Some(ClockAction::Restart),
            _ => None,
        }
    }

    fn render_events(&mut self, events: &ClockEvents) {
        for event in events {
            match *event {
                ClockEvent::RunStarted => {
                    self.leds.set(LedState::Active(self.engine.active()));
                    self.buzzer.play(BeepPattern::Start);
                }
                ClockEvent::RunPaused => {
                    self.leds.set(LedState::AllOff);
                    self.buzzer.play(BeepPattern::Pause);
                }
                ClockEvent::WarningOneMinute | ClockEvent::WarningThirtySeconds => {
                    self.buzzer.play(BeepPattern::Warning);
                }
                ClockEvent::FinalCountdownBeep(_) => {
                    self.buzzer.play(BeepPattern::FinalCountdown);
                }
                ClockEvent::TurnChanged(player) => {
                    self.leds.set(LedState::Active(player));
                }
                ClockEvent::GameEnded { .. } => {
                    self.leds.set(LedState::AllOff);
                    self.buzzer.play(BeepPattern::GameOver);
                }
            }
        }
    }

    // Mode changes that carry no event still need the LEDs settled.
    fn render_mode_entry(&mut self, action: ClockAction<I>) {
        if let ClockAction::ConfirmSetup(_) | ClockAction::Restart = action {
            self.leds.set(LedState::AllOff);
        }
    }

    fn refresh_display(&mut self) {
        let screen = Screen::render(&self.engine);

        for (row, line) in screen.lines().iter().enumerate() {
            let unchanged = self
                .shown
                .as_ref()
                .is_some_and(|shown| shown.line(row) == line.as_str());
            if !unchanged {
                debug_assert_eq!(line.len(), LINE_WIDTH);
                self.display.set_cursor(0, row as u8);
                self.display.write_str(line);
            }
        }

        self.shown = Some(screen);
    }

    fn next_poll_delay(&self) -> I::Duration {
        let active_left = self.engine.remaining(self.engine.active());
        if self.engine.is_running() && active_left <= FINAL_COUNTDOWN_MS {
            self.config.countdown_poll_interval
        } else {
            self.config.poll_interval
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &ClockEngine<I, N> {
        &self.engine
    }

    /// Returns the timing configuration.
    pub fn config(&self) -> &DispatcherConfig<I::Duration> {
        &self.config
    }

    /// Returns the screen last written to the display, if any.
    pub fn shown(&self) -> Option<&Screen> {
        self.shown.as_ref()
    }

    /// Consumes the dispatcher, returning the engine and collaborators.
    pub fn into_parts(self) -> (ClockEngine<I, N>, K, D, Z, L) {
        (self.engine, self.buttons, self.display, self.buzzer, self.leds)
    }
}
