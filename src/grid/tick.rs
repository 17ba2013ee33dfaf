//! Grid-chase fixed timestep tick
//!
//! One tick is an explicit ordered pipeline: consume pending heading,
//! move, bounds-check, self-collision-check, then target/growth. A fatal
//! check transitions to `Terminated` without mutating body or score.

use crate::consts::TARGET_REWARD;
use crate::session::Phase;

use super::state::{Cell, GridState};

/// Advance the grid-chase by one tick.
///
/// Only effective while `Running` and not paused; otherwise a no-op.
pub fn tick(state: &mut GridState) {
    if state.phase != Phase::Running || state.paused {
        return;
    }

    if let Some(heading) = state.pending_heading.take() {
        state.heading = heading;
    }

    let Some(head) = state.head() else {
        return;
    };
    state.time_ticks += 1;

    let (dx, dy) = state.heading.delta();
    let new_head = Cell::new(head.x + dx, head.y + dy);

    if !new_head.in_bounds() {
        state.phase = Phase::Terminated;
        return;
    }

    if state.body.contains(&new_head) {
        state.phase = Phase::Terminated;
        return;
    }

    state.body.push_front(new_head);

    if new_head == state.target {
        // Tail is kept: the body grows by one on the consuming tick.
        state.score += TARGET_REWARD;
        state.respawn_target();
        log::debug!(
            "target consumed at ({}, {}), score {}",
            new_head.x,
            new_head.y,
            state.score
        );
    } else {
        state.body.pop_back();
    }
}
