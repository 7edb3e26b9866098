//! Variable timestep simulation tick
//!
//! One call per rendered frame with the measured elapsed time. A slow frame
//! is one large step, never several catch-up steps.

use super::collision::first_hit;
use super::state::{GameState, Outcome};
use crate::error::SimError;
use crate::renderer::{DrawIntent, compose};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump was pressed this frame (edge-triggered, not held)
    pub jump: bool,
}

/// Advance the game state by `dt` seconds and return the frame to draw.
///
/// A negative or non-finite `dt` is rejected before anything is mutated.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
) -> Result<Vec<DrawIntent>, SimError> {
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(SimError::InvalidElapsed(dt));
    }

    state.layers.advance(dt);

    state.player.step(input.jump, dt, &state.physics);

    // Obstacles and the finish marker scroll together
    state.obstacles.advance(dt);

    // Sprite frame freezes while airborne
    if state.player.can_jump {
        state.player.sprite.advance(dt, state.player_max_frame);
    }

    if let Some(index) = first_hit(
        &state.player.sprite,
        state.obstacles.as_slice(),
        state.collision_pad,
    ) {
        if !state.collided {
            log::info!("Collision with obstacle {} at tick {}", index, state.time_ticks);
        }
        state.collided = true;
    }

    let outcome = Outcome::evaluate(state.collided, state.player_x(), state.obstacles.finish.x);
    if outcome != state.outcome {
        log::info!(
            "Outcome {:?} -> {:?} after {:.2}s",
            state.outcome,
            outcome,
            state.elapsed + dt as f64
        );
        state.outcome = outcome;
    }

    state.time_ticks += 1;
    state.elapsed += dt as f64;

    Ok(compose(state))
}
