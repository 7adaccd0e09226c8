//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. The host
//! calls [`tick`] once per 20 ms with the current viewport; inputs arrive as
//! one-shot command flags in [`TickInput`].
//!
//! All per-tick checks (pass scoring, pruning, spawn spacing, collision) are
//! evaluated against post-translation obstacle positions, so every check in a
//! tick sees the same snapshot of the world.

use super::collision::{bird_hits_obstacle, out_of_bounds};
use super::state::{GamePhase, GameState, Viewport};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap / start (space, tap). From game over this restarts instead.
    pub flap: bool,
    /// Restart from game over
    pub restart: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput, viewport: Viewport) {
    let mut input = *input;
    if input.idle_mode {
        autopilot(state, viewport, &mut input);
    }

    // From game over, the shared flap/start key acts as restart. The run
    // returns to Ready and waits for a separate start input.
    if state.phase == GamePhase::GameOver {
        if input.flap || input.restart {
            state.reset();
        }
        return;
    }
    if input.restart {
        state.reset();
        return;
    }

    if input.flap {
        let was_ready = state.phase == GamePhase::Ready;
        state.flap();
        if was_ready {
            // Starting input only arms the run; ticking begins next tick.
            return;
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Gravity
    state.bird.fall();

    // 2. Scroll obstacles and score passes
    let speed = state.speed;
    let mut passes = 0u32;
    for obs in &mut state.obstacles {
        obs.x -= speed;
        if !obs.passed && state.bird.pos.x > obs.x + OBSTACLE_WIDTH {
            obs.passed = true;
            passes += 1;
        }
    }
    state.score += passes * SCORE_PER_PASS;

    // 3. Drop pairs that are fully off-screen to the left
    state.obstacles.retain(|obs| obs.x > DESPAWN_X);

    // 4. Speed ramp (score never decreases, so this is monotone)
    state.speed = match state.score {
        300..600 => 2.5,
        600..1000 => 3.0,
        1000..1500 => 3.5,
        1500.. => 4.0,
        _ => state.speed,
    };

    // 5. Spawn once the newest pair has scrolled a full spacing inward
    let needs_spawn = state
        .obstacles
        .last()
        .is_none_or(|last| last.x < viewport.width - HORIZONTAL_SPACING);
    if needs_spawn {
        state.spawn_obstacle(viewport);
    }

    // 6. Viewport boundary check
    if out_of_bounds(state.bird.pos.y, viewport.height) {
        state.end_run();
        return;
    }

    // 7. Collision against either rectangle of any pair
    if state
        .obstacles
        .iter()
        .any(|obs| bird_hits_obstacle(state.bird.pos, obs, viewport))
    {
        state.end_run();
    }
}

/// Demo AI: start the run and flap whenever the bird's centre sits below the
/// centre of the nearest gap ahead.
fn autopilot(state: &GameState, viewport: Viewport, input: &mut TickInput) {
    match state.phase {
        GamePhase::Ready => input.flap = true,
        GamePhase::Playing => {
            let target = state
                .obstacles
                .iter()
                .find(|obs| obs.x + OBSTACLE_WIDTH > state.bird.pos.x)
                .map_or(viewport.height / 2.0, |obs| obs.gap_center(viewport.height));
            if state.bird.pos.y + BIRD_SIZE / 2.0 > target {
                input.flap = true;
            }
        }
        GamePhase::GameOver => {}
    }
}
