//! Chomp Arcade entry point
//!
//! Headless demo runner: plays one session of each engine with a trivial
//! scripted policy, driving the sessions the way a host UI would (elapsed
//! wall time in, inputs between advances), then prints a JSON summary.
//!
//! Usage: `chomp-arcade [seed]`

use std::cell::RefCell;
use std::env;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use chomp_arcade::consts::{
    ACTOR_SIZE, ACTOR_X, GAP_HEIGHT, GRID_TICK_MS, OBSTACLE_WIDTH, PLAYFIELD_HEIGHT,
    SCROLLER_TICK_MS,
};
use chomp_arcade::grid::{GridState, Heading};
use chomp_arcade::rewards::{GameKind, Ledger};
use chomp_arcade::scroller::ScrollerState;
use chomp_arcade::session::Session;

/// Maximum frames per demo run, in case a policy never dies
const FRAME_CAP: u32 = 100_000;

#[derive(Serialize)]
struct RunSummary {
    game: &'static str,
    seed: u64,
    ticks: u64,
    final_score: u32,
    tokens_earned: u32,
}

fn main() {
    env_logger::init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut ledger = Ledger::new();
    let grid = run_grid_demo(seed, &mut ledger);
    let scroller = run_scroller_demo(seed, &mut ledger);

    log::info!(
        "demo complete: best score {}, {} tokens",
        ledger.best_score,
        ledger.tokens
    );
    match serde_json::to_string_pretty(&(grid, scroller, ledger)) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("summary serialization failed: {err}"),
    }
}

/// Play grid-chase with a greedy steer-toward-target policy.
fn run_grid_demo(seed: u64, ledger: &mut Ledger) -> RunSummary {
    let reported = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&reported);
    let mut session = Session::new(GridState::new(seed), move |score| {
        *sink.borrow_mut() = Some(score);
    });
    session.engine_mut().start();

    let frame = Duration::from_millis(GRID_TICK_MS);
    for _ in 0..FRAME_CAP {
        if reported.borrow().is_some() {
            break;
        }
        let (head, target) = (session.engine().head(), session.engine().target);
        if let Some(head) = head {
            // Reversals are silently rejected, so just ask.
            let heading = if target.x > head.x {
                Heading::Right
            } else if target.x < head.x {
                Heading::Left
            } else if target.y > head.y {
                Heading::Down
            } else {
                Heading::Up
            };
            session.engine_mut().set_heading(heading);
        }
        session.advance(frame);
    }

    let final_score = reported.borrow().unwrap_or(session.engine().score);
    RunSummary {
        game: "grid-chase",
        seed,
        ticks: session.engine().time_ticks,
        final_score,
        tokens_earned: ledger.record(GameKind::GridChase, final_score),
    }
}

/// Play scroller-dodge, flapping whenever the actor sinks below the next
/// gap's center.
fn run_scroller_demo(seed: u64, ledger: &mut Ledger) -> RunSummary {
    let reported = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&reported);
    let mut session = Session::new(ScrollerState::new(seed), move |score| {
        *sink.borrow_mut() = Some(score);
    });
    session.engine_mut().apply_impulse();

    let frame = Duration::from_millis(SCROLLER_TICK_MS);
    for _ in 0..FRAME_CAP {
        if reported.borrow().is_some() {
            break;
        }
        let engine = session.engine();
        let gap_center = engine
            .obstacles
            .iter()
            .find(|o| o.x + OBSTACLE_WIDTH >= ACTOR_X)
            .map(|o| o.gap_top + GAP_HEIGHT / 2.0)
            .unwrap_or(PLAYFIELD_HEIGHT / 2.0);
        if engine.actor.y + ACTOR_SIZE / 2.0 > gap_center && engine.actor.vy >= 0.0 {
            session.engine_mut().apply_impulse();
        }
        session.advance(frame);
    }

    let final_score = reported.borrow().unwrap_or(session.engine().score);
    RunSummary {
        game: "scroller-dodge",
        seed,
        ticks: session.engine().time_ticks,
        final_score,
        tokens_earned: ledger.record(GameKind::ScrollerDodge, final_score),
    }
}
