//! Non-blocking button debouncing.

use crate::time::{TimeDuration, TimeInstant, millis_since};

/// Turns a sampled button level into discrete press events.
///
/// A press is accepted on a pressed sample when the button is armed. The
/// button re-arms when it is seen released after the refractory interval has
/// passed since the last accepted press, so contact bounce inside that window
/// never produces a second press. With a hold-repeat interval configured, a
/// button held down fires again each time that interval elapses.
pub struct Debouncer<I: TimeInstant> {
    refractory: I::Duration,
    hold_repeat: Option<I::Duration>,
    armed: bool,
    last_accepted: Option<I>,
}

impl<I: TimeInstant> Debouncer<I> {
    /// Creates a debouncer without hold-repeat.
    ///
    /// # Arguments
    /// * `refractory` - Minimum time between accepted presses
    pub fn new(refractory: I::Duration) -> Self {
        Self {
            refractory,
            hold_repeat: None,
            armed: true,
            last_accepted: None,
        }
    }

    /// Creates a debouncer that re-fires every `hold_repeat` while held.
    pub fn with_hold_repeat(refractory: I::Duration, hold_repeat: I::Duration) -> Self {
        Self {
            hold_repeat: Some(hold_repeat),
            ..Self::new(refractory)
        }
    }

    /// Feeds one sample.
    ///
    /// # Arguments
    /// * `pressed` - Current level of the button, polarity already resolved
    /// * `now` - When the sample was taken
    ///
    /// # Returns
    /// `true` if this sample is a newly accepted press
    pub fn update(&mut self, pressed: bool, now: I) -> bool {
        if !pressed {
            if self.waited(now, self.refractory) {
                self.armed = true;
            }
            return false;
        }

        let repeat = match self.hold_repeat {
            Some(interval) => self.waited(now, interval),
            None => false,
        };

        if self.armed || repeat {
            self.armed = false;
            self.last_accepted = Some(now);
            return true;
        }

        false
    }

    /// Returns true if the button would accept a press right now.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn waited(&self, now: I, interval: I::Duration) -> bool {
        match self.last_accepted {
            Some(last) => millis_since(now, last) >= interval.as_millis(),
            None => true,
        }
    }
}
