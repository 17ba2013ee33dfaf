//! Scroller-dodge engine
//!
//! Continuous vertical motion under constant gravity with an
//! impulse-on-input mechanic, against a stream of procedurally spawned
//! paired obstacles scrolling left at ~60 Hz. Terminates on boundary or
//! obstacle collision; the final score is reported after a 2 second hold.
//!
//! Deterministic: fixed timestep, seeded RNG, no platform dependencies.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use state::{Actor, Obstacle, ScrollerState};
pub use tick::tick;

use std::time::Duration;

use crate::consts::{END_REPORT_DELAY_MS, SCROLLER_TICK_MS};
use crate::session::{Engine, Phase};

impl Engine for ScrollerState {
    fn phase(&self) -> Phase {
        self.phase
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn step(&mut self) {
        tick(self);
    }

    fn tick_period(&self) -> Duration {
        Duration::from_millis(SCROLLER_TICK_MS)
    }

    fn end_report_delay(&self) -> Duration {
        // Hold the terminal display before the host reclaims control.
        Duration::from_millis(END_REPORT_DELAY_MS)
    }

    fn reset(&mut self) {
        ScrollerState::reset(self);
    }
}
