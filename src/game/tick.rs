use std::time::{Duration, Instant};

/// Monotonic time source, abstracted so tests can drive it by hand
pub trait Clock {
    fn now(&self) -> Instant;
}

/// The real clock used outside of tests
#[derive(Debug, Default, Clone, Copy)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Rate limiter decoupling the logical update rate from the frame rate.
///
/// Polled once per frame; returns true at most once per interval. Each
/// trigger resets the baseline to *now* rather than `last_trigger +
/// interval`, so a slow frame produces exactly one step and never a
/// catch-up burst.
pub struct TickGate<C: Clock = MonotonicClock> {
    clock: C,
    interval: Duration,
    last_trigger: Instant,
}

impl TickGate<MonotonicClock> {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, MonotonicClock)
    }
}

impl<C: Clock> TickGate<C> {
    pub fn with_clock(interval: Duration, clock: C) -> Self {
        let last_trigger = clock.now();
        Self {
            clock,
            interval,
            last_trigger,
        }
    }

    /// True if a full interval has elapsed since the last trigger.
    /// No side effects on a false return.
    pub fn triggered(&mut self) -> bool {
        let now = self.clock.now();
        if now.duration_since(self.last_trigger) >= self.interval {
            self.last_trigger = now;
            true
        } else {
            false
        }
    }
}
