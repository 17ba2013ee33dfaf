//! Scroller-dodge fixed timestep tick
//!
//! One tick is an explicit ordered pipeline:
//! move -> bounds-check -> scroll/prune -> spawn -> scoring -> collision.
//! Scoring and collision run as separate read-then-write passes over the
//! obstacle list.

use crate::consts::{
    ACTOR_SIZE, ACTOR_X, GRAVITY, OBSTACLE_WIDTH, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, SCROLL_SPEED,
    SPAWN_SPACING,
};
use crate::session::Phase;

use super::state::{Obstacle, ScrollerState};

/// Advance the scroller by one tick. Only effective while `Running`.
pub fn tick(state: &mut ScrollerState) {
    if state.phase != Phase::Running {
        return;
    }
    state.time_ticks += 1;

    // Move: integrate position, then accelerate. A boundary hit aborts the
    // tick without committing the new position.
    let new_y = state.actor.y + state.actor.vy;
    if new_y < 0.0 || new_y > PLAYFIELD_HEIGHT - ACTOR_SIZE {
        state.phase = Phase::Terminated;
        return;
    }
    state.actor.y = new_y;
    state.actor.vy += GRAVITY;

    // Scroll and prune obstacles fully past the left edge.
    for obstacle in &mut state.obstacles {
        obstacle.x -= SCROLL_SPEED;
    }
    state.obstacles.retain(|o| o.x > -OBSTACLE_WIDTH);

    // Spawn once the last obstacle has scrolled SPAWN_SPACING in.
    let due = state
        .obstacles
        .last()
        .is_none_or(|last| last.x < PLAYFIELD_WIDTH - SPAWN_SPACING);
    if due {
        let gap_top = state.draw_gap_top();
        state.obstacles.push(Obstacle::spawn(gap_top));
    }

    // Scoring: first time an obstacle's trailing edge clears the actor.
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.x + OBSTACLE_WIDTH < ACTOR_X {
            obstacle.passed = true;
            state.score += 1;
            log::debug!("obstacle passed, score {}", state.score);
        }
    }

    // Collision: actor box against both barriers of every obstacle.
    let actor_rect = state.actor.rect();
    for obstacle in &state.obstacles {
        if actor_rect.overlaps(&obstacle.top_rect()) || actor_rect.overlaps(&obstacle.bottom_rect())
        {
            state.phase = Phase::Terminated;
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::consts::{ACTOR_START_Y, GAP_HEIGHT, IMPULSE_VELOCITY};

    use super::*;

    fn running_state(seed: u64) -> ScrollerState {
        let mut state = ScrollerState::new(seed);
        state.apply_impulse();
        state.actor.vy = 0.0; // cancel the starting impulse for exact math
        state
    }

    /// Keep the actor safely inside the gap so only the property under
    /// test can terminate the run.
    fn hover(state: &mut ScrollerState) {
        for obstacle in &mut state.obstacles {
            obstacle.gap_top = ACTOR_START_Y - GAP_HEIGHT / 2.0;
        }
        state.actor.y = ACTOR_START_Y;
        state.actor.vy = 0.0;
    }

    #[test]
    fn test_gravity_integration_order() {
        // Worked example: y=250, vy=0 -> after one tick y=250, vy=0.5;
        // after two ticks y=250.5.
        let mut state = running_state(1);
        tick(&mut state);
        assert_eq!(state.actor.y, 250.0);
        assert_eq!(state.actor.vy, 0.5);
        hover(&mut state);
        state.actor.vy = 0.5;
        tick(&mut state);
        assert_eq!(state.actor.y, 250.5);
    }

    #[test]
    fn test_impulse_sets_velocity() {
        let mut state = running_state(1);
        state.apply_impulse();
        assert_eq!(state.actor.vy, IMPULSE_VELOCITY);
    }

    #[test]
    fn test_boundary_hit_terminates_without_committing_y() {
        let mut state = running_state(1);
        state.actor.y = 10.0;
        state.actor.vy = -20.0;
        tick(&mut state);
        assert_eq!(state.phase, Phase::Terminated);
        assert_eq!(state.actor.y, 10.0);

        let mut state = running_state(1);
        state.actor.y = PLAYFIELD_HEIGHT - ACTOR_SIZE - 1.0;
        state.actor.vy = 5.0;
        tick(&mut state);
        assert_eq!(state.phase, Phase::Terminated);
    }

    #[test]
    fn test_first_tick_spawns_an_obstacle() {
        let mut state = running_state(1);
        tick(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, PLAYFIELD_WIDTH);
        assert!(!state.obstacles[0].passed);
    }

    #[test]
    fn test_spawn_spacing_is_constant() {
        let mut state = running_state(9);
        let mut spawn_gaps = Vec::new();
        let mut last_count = 0;
        for _ in 0..1200 {
            hover(&mut state);
            tick(&mut state);
            assert_eq!(state.phase, Phase::Running);
            if state.obstacles.len() > last_count && state.obstacles.len() >= 2 {
                let n = state.obstacles.len();
                spawn_gaps.push(state.obstacles[n - 1].x - state.obstacles[n - 2].x);
            }
            last_count = state.obstacles.len();
        }
        assert!(spawn_gaps.len() >= 3);
        let first = spawn_gaps[0];
        assert!(spawn_gaps.iter().all(|&gap| gap == first));
    }

    #[test]
    fn test_scoring_is_idempotent_per_obstacle() {
        let mut state = running_state(1);
        // One obstacle about to clear the actor's trailing edge.
        state.obstacles.push(Obstacle {
            x: ACTOR_X - OBSTACLE_WIDTH + 1.0,
            gap_top: ACTOR_START_Y - GAP_HEIGHT / 2.0,
            passed: false,
        });
        hover(&mut state);
        tick(&mut state);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].passed);

        // Further ticks never re-score the same obstacle.
        for _ in 0..30 {
            hover(&mut state);
            tick(&mut state);
        }
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_obstacles_pruned_off_the_left_edge() {
        let mut state = running_state(1);
        state.obstacles.push(Obstacle {
            x: -OBSTACLE_WIDTH + 1.0,
            gap_top: ACTOR_START_Y - GAP_HEIGHT / 2.0,
            passed: true,
        });
        hover(&mut state);
        tick(&mut state);
        assert!(state.obstacles.iter().all(|o| o.x > -OBSTACLE_WIDTH));
    }

    #[test]
    fn test_collision_with_barrier_terminates() {
        let mut state = running_state(1);
        // Gap far below the actor: the top barrier covers the actor's box.
        state.obstacles.push(Obstacle {
            x: ACTOR_X,
            gap_top: ACTOR_START_Y + 200.0,
            passed: false,
        });
        tick(&mut state);
        assert_eq!(state.phase, Phase::Terminated);
    }

    #[test]
    fn test_actor_inside_gap_survives() {
        let mut state = running_state(1);
        state.obstacles.push(Obstacle {
            x: ACTOR_X,
            gap_top: ACTOR_START_Y - GAP_HEIGHT / 2.0,
            passed: false,
        });
        tick(&mut state);
        assert_eq!(state.phase, Phase::Running);
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let mut a = ScrollerState::new(777);
        let mut b = ScrollerState::new(777);
        a.apply_impulse();
        b.apply_impulse();
        for i in 0..400 {
            if i % 20 == 0 {
                a.apply_impulse();
                b.apply_impulse();
            }
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.actor, b.actor);
        assert_eq!(a.obstacles, b.obstacles);
    }
}
