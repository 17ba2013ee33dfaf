//! Grid-chase engine
//!
//! Discrete 20x20 grid simulation: a chain of occupied cells grows by
//! consuming a randomly placed target, moving one cell per 150 ms tick.
//! Terminates on boundary or self collision.
//!
//! Deterministic: fixed timestep, seeded RNG, no platform dependencies.

pub mod state;
pub mod tick;

pub use state::{Cell, GridState, Heading};
pub use tick::tick;

use std::time::Duration;

use crate::consts::GRID_TICK_MS;
use crate::session::{Engine, Phase};

impl Engine for GridState {
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
        Duration::from_millis(GRID_TICK_MS)
    }

    fn end_report_delay(&self) -> Duration {
        // Reports immediately; only the scroller holds its terminal
        // display before handing control back.
        Duration::ZERO
    }

    fn reset(&mut self) {
        GridState::reset(self);
    }
}
