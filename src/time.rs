//! Time abstraction traits for platform-agnostic timing.
//!
//! The clock never reads a hardware timer itself. Every operation that needs
//! the current time receives an instant, and the dispatcher pulls instants
//! from a [`TimeSource`]. Firmware wraps its own tick counter (SysTick,
//! `embassy_time::Instant`, a wrapping `u32` millisecond counter) in these
//! traits.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Returns the forward distance from `earlier` to `self`.
    ///
    /// Callers pass an `earlier` read from the same monotonic source less
    /// than one counter period before `self`. A wrapping tick counter meets
    /// this with wrapping subtraction, as long as it is polled at least once
    /// per wrap. Must not panic; an unbounded counter saturates at
    /// [`TimeDuration::ZERO`] for an out-of-order pair.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Milliseconds elapsed from `earlier` to `now`.
#[inline]
pub(crate) fn millis_since<I: TimeInstant>(now: I, earlier: I) -> u64 {
    now.duration_since(earlier).as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Millis(u64);

    impl TimeDuration for Millis {
        const ZERO: Self = Millis(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            Millis(millis)
        }
    }

    // 32-bit wrapping tick counter, like a SysTick millisecond count
    #[derive(Debug, Clone, Copy)]
    struct Tick(u32);

    impl TimeInstant for Tick {
        type Duration = Millis;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            Millis(self.0.wrapping_sub(earlier.0) as u64)
        }
    }

    #[test]
    fn millis_since_handles_counter_wraparound() {
        let before = Tick(u32::MAX - 9);
        let after = Tick(20);
        assert_eq!(millis_since(after, before), 30);
    }

    // 64-bit counter that never wraps in practice
    #[derive(Debug, Clone, Copy)]
    struct Uptime(u64);

    impl TimeInstant for Uptime {
        type Duration = Millis;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            Millis(self.0.saturating_sub(earlier.0))
        }
    }

    #[test]
    fn unbounded_counter_saturates_out_of_order_pair() {
        assert_eq!(millis_since(Uptime(1_000), Uptime(4_000)), 0);
        assert_eq!(millis_since(Uptime(4_000), Uptime(1_000)), 3_000);
    }

    #[test]
    fn millis_since_same_instant_is_zero() {
        assert_eq!(millis_since(Tick(500), Tick(500)), 0);
    }
}
