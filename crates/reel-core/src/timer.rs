#![forbid(unsafe_code)]

//! Virtual-time timers owned by the controller.
//!
//! Timers never read a clock. The owner feeds elapsed time with
//! [`elapse`](IntervalTimer::elapse) and asks how long until the next
//! deadline, which keeps the controller deterministic under test and lets
//! hosts drive it from any event loop.
//!
//! Replacing or dropping a timer value is the only way to cancel it, so a
//! stale handle can never fire after its replacement was armed.

use web_time::Duration;

/// A periodic timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    /// Arm a timer with the given non-zero period, starting at phase zero.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        debug_assert!(!period.is_zero(), "interval period must be non-zero");
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// The timer period.
    #[inline]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time until the next fire.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Reset the phase to zero.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `delta`, returning how many times the timer fired.
    ///
    /// The count is exact for any `delta`, up to [`Duration::MAX`].
    pub fn elapse(&mut self, delta: Duration) -> u128 {
        let period = self.period.as_nanos();
        if period == 0 {
            return 0;
        }
        let total = self.elapsed.as_nanos() + delta.as_nanos();
        // phase < period, and period came from a Duration
        self.elapsed = duration_from_nanos(total % period);
        total / period
    }
}

fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}

/// A single-shot timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotTimer {
    remaining: Duration,
}

impl OneShotTimer {
    /// Arm a timer that fires after `delay`.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { remaining: delay }
    }

    /// Time until the timer fires.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Advance by `delta`. Returns `true` once the deadline is reached.
    pub fn elapse(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.remaining.is_zero()
    }
}
