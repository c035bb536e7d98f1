//! One-shot time-pressure notifications.

use crate::event::{ClockEvent, ClockEvents};

/// First warning threshold.
pub const ONE_MINUTE_MS: u64 = 60_000;

/// Second warning threshold.
pub const THIRTY_SECONDS_MS: u64 = 30_000;

/// The final countdown beeps once per second below this.
pub const FINAL_COUNTDOWN_MS: u64 = 5_000;

/// Tracks which notifications have already fired in the current game.
///
/// Flags are per game, not per turn: once the one-minute warning has sounded
/// for either player it does not sound again until a new game is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WarningState {
    fired_one_minute: bool,
    fired_thirty_seconds: bool,
    last_countdown_second: Option<u8>,
}

impl WarningState {
    /// A state with nothing fired.
    pub const fn new() -> Self {
        Self {
            fired_one_minute: false,
            fired_thirty_seconds: false,
            last_countdown_second: None,
        }
    }

    /// Forgets everything that has fired.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Appends the notifications crossed by `remaining_ms` to `events`.
    ///
    /// `remaining_ms` is the active player's time after debiting and must be
    /// non-zero; reaching zero is a game end, not a warning.
    pub fn evaluate(&mut self, remaining_ms: u64, events: &mut ClockEvents) {
        // capacity covers every event one tick can produce
        if remaining_ms <= ONE_MINUTE_MS && !self.fired_one_minute {
            self.fired_one_minute = true;
            let _ = events.push(ClockEvent::WarningOneMinute);
        }

        if remaining_ms <= THIRTY_SECONDS_MS && !self.fired_thirty_seconds {
            self.fired_thirty_seconds = true;
            let _ = events.push(ClockEvent::WarningThirtySeconds);
        }

        if remaining_ms > 0 && remaining_ms <= FINAL_COUNTDOWN_MS {
            let seconds_left = remaining_ms.div_ceil(1000) as u8;
            let due = match self.last_countdown_second {
                None => true,
                Some(last) => seconds_left < last,
            };
            if due {
                self.last_countdown_second = Some(seconds_left);
                let _ = events.push(ClockEvent::FinalCountdownBeep(seconds_left));
            }
        }
    }

    /// True once the one-minute warning has sounded this game.
    pub fn fired_one_minute(&self) -> bool {
        self.fired_one_minute
    }

    /// True once the thirty-second warning has sounded this game.
    pub fn fired_thirty_seconds(&self) -> bool {
        self.fired_thirty_seconds
    }

    /// The last second value the final countdown beeped for.
    pub fn last_countdown_second(&self) -> Option<u8> {
        self.last_countdown_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(state: &mut WarningState, remaining_ms: u64) -> ClockEvents {
        let mut events = ClockEvents::new();
        state.evaluate(remaining_ms, &mut events);
        events
    }

    #[test]
    fn nothing_fires_above_one_minute() {
        let mut state = WarningState::new();
        assert!(evaluate(&mut state, 60_001).is_empty());
        assert_eq!(state, WarningState::new());
    }

    #[test]
    fn one_minute_fires_exactly_at_threshold_and_only_once() {
        let mut state = WarningState::new();
        assert_eq!(evaluate(&mut state, 60_000).as_slice(), &[ClockEvent::WarningOneMinute]);
        assert!(evaluate(&mut state, 59_000).is_empty());
        assert!(state.fired_one_minute());
    }

    #[test]
    fn large_jump_fires_both_warnings_in_order() {
        let mut state = WarningState::new();
        let events = evaluate(&mut state, 29_000);
        assert_eq!(
            events.as_slice(),
            &[ClockEvent::WarningOneMinute, ClockEvent::WarningThirtySeconds]
        );
    }

    #[test]
    fn countdown_uses_ceiling_seconds() {
        let mut state = WarningState::new();
        state.fired_one_minute = true;
        state.fired_thirty_seconds = true;

        assert_eq!(evaluate(&mut state, 5_000).as_slice(), &[ClockEvent::FinalCountdownBeep(5)]);
        assert!(evaluate(&mut state, 4_001).is_empty());
        assert_eq!(evaluate(&mut state, 4_000).as_slice(), &[ClockEvent::FinalCountdownBeep(4)]);
        assert_eq!(evaluate(&mut state, 1).as_slice(), &[ClockEvent::FinalCountdownBeep(1)]);
        assert_eq!(state.last_countdown_second(), Some(1));
    }

    #[test]
    fn countdown_never_repeats_a_higher_second() {
        let mut state = WarningState::new();
        state.fired_one_minute = true;
        state.fired_thirty_seconds = true;

        evaluate(&mut state, 2_500);
        // another player's clock at 4.5s must not beep again for 5
        assert!(evaluate(&mut state, 4_500).is_empty());
        assert_eq!(evaluate(&mut state, 1_500).as_slice(), &[ClockEvent::FinalCountdownBeep(2)]);
    }

    #[test]
    fn clear_rearms_everything() {
        let mut state = WarningState::new();
        evaluate(&mut state, 3_000);
        state.clear();
        assert_eq!(evaluate(&mut state, 3_000).len(), 3);
    }
}
