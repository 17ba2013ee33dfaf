//! Grid-chase state and input handling

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{BOARD_SIZE, GRID_START_CELL};
use crate::session::Phase;

/// A grid coordinate, `0 <= x,y < BOARD_SIZE` while in play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }
}

/// Direction of travel. Grid y grows downward, so `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    /// Whether `other` is the axis-opposite of `self`.
    pub fn opposes(self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }
}

/// Complete grid-chase state
#[derive(Debug, Clone)]
pub struct GridState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lifecycle phase
    pub phase: Phase,
    /// Pause flag; ticks while paused are wasted, not deferred
    pub paused: bool,
    /// Occupied cells, head first. Never empty, no duplicates while alive.
    pub body: VecDeque<Cell>,
    /// Current target cell
    pub target: Cell,
    /// Heading last consumed by a tick
    pub heading: Heading,
    /// Accepted input waiting for the next tick (latest wins)
    pub pending_heading: Option<Heading>,
    /// Score, +10 per consumed target
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl GridState {
    /// Create an `Idle` state: single starting cell, heading up, fresh
    /// random target.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = random_target(&mut rng);
        let (x, y) = GRID_START_CELL;
        Self {
            seed,
            phase: Phase::Idle,
            paused: false,
            body: VecDeque::from([Cell::new(x, y)]),
            target,
            heading: Heading::Up,
            pending_heading: None,
            score: 0,
            time_ticks: 0,
            rng,
        }
    }

    /// Begin ticking without waiting for a directional input.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Request a heading change, applied on the next tick.
    ///
    /// A reversal of the current heading is silently ignored (it would be
    /// an instant self collision), including while paused. The first
    /// accepted input also starts an idle session.
    pub fn set_heading(&mut self, requested: Heading) {
        if self.phase == Phase::Terminated {
            return;
        }
        if requested.opposes(self.heading) {
            return;
        }
        self.pending_heading = Some(requested);
        if self.phase == Phase::Idle {
            self.phase = Phase::Running;
        }
    }

    /// Toggle the pause flag. The tick clock keeps running; paused ticks
    /// are no-ops.
    pub fn toggle_pause(&mut self) {
        if self.phase != Phase::Terminated {
            self.paused = !self.paused;
        }
    }

    /// Return to `Idle`: single starting cell, heading up, fresh random
    /// target, score zero. Replays the same seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    /// Head cell. The body is never empty by construction.
    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    pub(crate) fn respawn_target(&mut self) {
        self.target = random_target(&mut self.rng);
    }
}

/// Uniform random cell over the whole board.
///
/// Cells occupied by the body are NOT excluded; a target spawned under
/// the body is consumed as the body grows through it.
fn random_target(rng: &mut Pcg32) -> Cell {
    Cell::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_with_single_cell() {
        let state = GridState::new(7);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.body.len(), 1);
        assert_eq!(state.head(), Some(Cell::new(10, 10)));
        assert_eq!(state.heading, Heading::Up);
        assert_eq!(state.score, 0);
        assert!(state.target.in_bounds());
    }

    #[test]
    fn test_first_heading_input_starts_the_run() {
        let mut state = GridState::new(7);
        state.set_heading(Heading::Left);
        assert_eq!(state.phase, Phase::Running);
        assert_eq!(state.pending_heading, Some(Heading::Left));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut state = GridState::new(7);
        state.start();
        state.set_heading(Heading::Down);
        assert_eq!(state.pending_heading, None);
    }

    #[test]
    fn test_reversal_rejected_while_paused() {
        let mut state = GridState::new(7);
        state.start();
        state.toggle_pause();
        state.set_heading(Heading::Down);
        assert_eq!(state.pending_heading, None);
        // Non-reversing input is still accepted while paused.
        state.set_heading(Heading::Right);
        assert_eq!(state.pending_heading, Some(Heading::Right));
    }

    #[test]
    fn test_latest_pending_heading_wins() {
        let mut state = GridState::new(7);
        state.start();
        state.set_heading(Heading::Left);
        state.set_heading(Heading::Right);
        // Right opposes Left but not the current heading (Up), so it
        // replaces the pending value.
        assert_eq!(state.pending_heading, Some(Heading::Right));
    }

    #[test]
    fn test_same_seed_same_target_sequence() {
        let mut a = GridState::new(99);
        let mut b = GridState::new(99);
        assert_eq!(a.target, b.target);
        a.respawn_target();
        b.respawn_target();
        assert_eq!(a.target, b.target);
    }
}
