//! Scroller-dodge state and input handling

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{
    ACTOR_SIZE, ACTOR_START_Y, ACTOR_X, GAP_HEIGHT, GAP_MARGIN, IMPULSE_VELOCITY, OBSTACLE_WIDTH,
    PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH,
};
use crate::session::Phase;

use super::collision::Rect;

/// The player-controlled actor. Horizontal position is fixed at
/// [`ACTOR_X`]; only vertical position and velocity evolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub y: f32,
    pub vy: f32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            y: ACTOR_START_Y,
            vy: 0.0,
        }
    }

    /// Bounding box at the actor's fixed x.
    pub fn rect(&self) -> Rect {
        Rect::new(Vec2::new(ACTOR_X, self.y), Vec2::splat(ACTOR_SIZE))
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// A scrolling paired barrier with a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the passable gap
    pub gap_top: f32,
    /// Set once when the actor clears the trailing edge, never reset
    pub passed: bool,
}

impl Obstacle {
    pub fn spawn(gap_top: f32) -> Self {
        Self {
            x: PLAYFIELD_WIDTH,
            gap_top,
            passed: false,
        }
    }

    /// Barrier above the gap.
    pub fn top_rect(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(OBSTACLE_WIDTH, self.gap_top),
        )
    }

    /// Barrier below the gap.
    pub fn bottom_rect(&self) -> Rect {
        let top = self.gap_top + GAP_HEIGHT;
        Rect::new(
            Vec2::new(self.x, top),
            Vec2::new(OBSTACLE_WIDTH, PLAYFIELD_HEIGHT - top),
        )
    }
}

/// Complete scroller-dodge state
#[derive(Debug, Clone)]
pub struct ScrollerState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Lifecycle phase
    pub phase: Phase,
    pub actor: Actor,
    /// Active obstacles, ascending by x (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Score, +1 per obstacle passed
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl ScrollerState {
    /// Create an `Idle` state: actor at rest mid-field, no obstacles.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: Phase::Idle,
            actor: Actor::new(),
            obstacles: Vec::new(),
            score: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Set the actor's velocity to the fixed upward impulse.
    ///
    /// The first impulse also starts an idle session. No-op once
    /// terminated.
    pub fn apply_impulse(&mut self) {
        match self.phase {
            Phase::Terminated => {}
            Phase::Idle => {
                self.phase = Phase::Running;
                self.actor.vy = IMPULSE_VELOCITY;
            }
            Phase::Running => {
                self.actor.vy = IMPULSE_VELOCITY;
            }
        }
    }

    /// Return to `Idle` with fresh initial state. Replays the same seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    pub(crate) fn draw_gap_top(&mut self) -> f32 {
        self.rng
            .random_range(GAP_MARGIN..PLAYFIELD_HEIGHT - GAP_HEIGHT - GAP_MARGIN)
    }
}
