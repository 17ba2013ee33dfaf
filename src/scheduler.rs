//! Tick and one-shot timer handles
//!
//! Sessions own their timers as plain values instead of ambient interval
//! callbacks: a `TickClock` converts elapsed wall time into a number of due
//! fixed-interval ticks, and a `DelayTimer` counts down a single deadline.
//! Both cancel synchronously and never fire after cancellation.

use std::time::Duration;

use crate::consts::MAX_SUBSTEPS;

/// Fixed-interval tick accumulator.
///
/// `advance` returns how many whole periods have elapsed since the last
/// call, capped at [`MAX_SUBSTEPS`]; when the cap is hit the backlog is
/// discarded so a long stall cannot trigger a tick avalanche.
#[derive(Debug, Clone)]
pub struct TickClock {
    period: Duration,
    accumulator: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulator: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Accumulate elapsed time and return the number of due ticks.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.period && due < MAX_SUBSTEPS {
            self.accumulator -= self.period;
            due += 1;
        }
        if due == MAX_SUBSTEPS {
            // Drop the backlog rather than replaying a stall.
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Discard any partial accumulation.
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}

/// One-shot countdown timer.
///
/// Fires at most once per arming; `cancel` takes effect immediately.
#[derive(Debug, Clone, Default)]
pub struct DelayTimer {
    remaining: Option<Duration>,
}

impl DelayTimer {
    pub fn idle() -> Self {
        Self { remaining: None }
    }

    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Count down by `elapsed`; returns true on the call where the
    /// deadline is reached, false on every other call.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.remaining {
            Some(remaining) if elapsed >= remaining => {
                self.remaining = None;
                true
            }
            Some(remaining) => {
                self.remaining = Some(remaining - elapsed);
                false
            }
            None => false,
        }
    }
}
