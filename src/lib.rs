//! Chomp Arcade - fixed-timestep engines for a two-game reflex arcade
//!
//! Core modules:
//! - `grid`: grid-chase engine (snake-style, 150 ms tick)
//! - `scroller`: scroller-dodge engine (gravity + impulse, 16 ms tick)
//! - `session`: shared start/stop/input/tick lifecycle and end-of-game reporting
//! - `scheduler`: explicit tick and one-shot timer handles owned by sessions
//! - `rewards`: host-side score-to-token conversion policy

pub mod grid;
pub mod rewards;
pub mod scheduler;
pub mod scroller;
pub mod session;

pub use grid::GridState;
pub use scroller::ScrollerState;
pub use session::{Engine, Phase, Session};

/// Game configuration constants
pub mod consts {
    /// Maximum ticks drained per scheduler advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Grid-chase board is square, `BOARD_SIZE` cells per side
    pub const BOARD_SIZE: i32 = 20;
    /// Grid-chase tick interval in milliseconds
    pub const GRID_TICK_MS: u64 = 150;
    /// Starting cell for the grid-chase body
    pub const GRID_START_CELL: (i32, i32) = (10, 10);
    /// Score awarded per consumed target
    pub const TARGET_REWARD: u32 = 10;

    /// Scroller tick interval in milliseconds (~60 Hz)
    pub const SCROLLER_TICK_MS: u64 = 16;
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Actor bounding box is square
    pub const ACTOR_SIZE: f32 = 30.0;
    /// Actor's fixed horizontal position
    pub const ACTOR_X: f32 = 100.0;
    /// Actor's starting vertical position
    pub const ACTOR_START_Y: f32 = 250.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set on input
    pub const IMPULSE_VELOCITY: f32 = -8.0;
    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Obstacle dimensions
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Gap top is drawn at least this far from either playfield edge
    pub const GAP_MARGIN: f32 = 50.0;
    /// A new obstacle spawns once the last one has scrolled this far in
    pub const SPAWN_SPACING: f32 = 300.0;
    /// Hold on the terminal display before the final score is reported
    pub const END_REPORT_DELAY_MS: u64 = 2000;
}
