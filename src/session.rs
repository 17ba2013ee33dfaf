//! Shared engine lifecycle contract
//!
//! Both game engines follow the same `Idle -> Running -> Terminated` shape
//! and report a final score to the host exactly once. `Session` owns the
//! engine together with its timers and is the only place the host callback
//! lives, so "exactly once" and "cancelled on reset" are enforced in one
//! spot instead of per engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scheduler::{DelayTimer, TickClock};

/// Lifecycle phase shared by both engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No ticking; waiting for the first input or an explicit start
    Idle,
    /// Ticking on the engine's fixed interval
    Running,
    /// Fatal collision happened; the session cannot resume
    Terminated,
}

/// A tick-driven game engine consumed by [`Session`].
pub trait Engine {
    fn phase(&self) -> Phase;

    /// Current score; once `Terminated` this is the final score.
    fn score(&self) -> u32;

    /// Advance the simulation by one fixed step.
    fn step(&mut self);

    /// Fixed tick interval.
    fn tick_period(&self) -> Duration;

    /// Hold between entering `Terminated` and reporting the final score.
    fn end_report_delay(&self) -> Duration;

    /// Return to `Idle` with fresh initial state.
    fn reset(&mut self);
}

/// Host callback invoked with the final score, at most once per session.
pub type EndCallback = Box<dyn FnOnce(u32)>;

/// Owns an engine, its tick clock, and the end-of-game report timer.
///
/// The host drives the session by calling [`Session::advance`] with elapsed
/// wall time from its own loop; inputs are routed to the engine between
/// advances via [`Session::engine_mut`].
pub struct Session<E: Engine> {
    engine: E,
    clock: TickClock,
    end_delay: DelayTimer,
    on_end: Option<EndCallback>,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E, on_end: impl FnOnce(u32) + 'static) -> Self {
        let clock = TickClock::new(engine.tick_period());
        Self {
            engine,
            clock,
            end_delay: DelayTimer::idle(),
            on_end: Some(Box::new(on_end)),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Whether the final score has been reported to the host.
    pub fn is_reported(&self) -> bool {
        self.on_end.is_none()
    }

    /// Drive the session forward by `elapsed` wall time.
    ///
    /// Runs every due tick, arms the report delay when the engine enters
    /// `Terminated`, and fires the host callback once the delay lapses.
    pub fn advance(&mut self, elapsed: Duration) {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            if self.engine.phase() == Phase::Terminated {
                break;
            }
            self.engine.step();
        }

        if self.engine.phase() == Phase::Terminated
            && self.on_end.is_some()
            && !self.end_delay.is_armed()
        {
            log::info!("game over, final score {}", self.engine.score());
            self.end_delay.arm(self.engine.end_report_delay());
        }

        if self.end_delay.advance(elapsed)
            && let Some(on_end) = self.on_end.take()
        {
            on_end(self.engine.score());
        }
    }

    /// Cancel all pending timers synchronously, then reset the engine.
    ///
    /// A report that has not fired yet is cancelled with the timers; the
    /// callback stays available for the next run of this session.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.end_delay.cancel();
        self.engine.reset();
    }
}
