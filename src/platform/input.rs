//! Jump input sources

use std::collections::BTreeSet;

use crate::sim::{GameState, obstacle_hitbox};

/// Edge-triggered jump button
pub trait JumpInput {
    /// True only on the frame the button went down
    fn jump_pressed_this_tick(&mut self, state: &GameState) -> bool;
}

/// Presses jump on a fixed set of frame numbers (0-based)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: BTreeSet<u64>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = u64>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl JumpInput for ScriptedInput {
    fn jump_pressed_this_tick(&mut self, state: &GameState) -> bool {
        self.frames.contains(&state.time_ticks)
    }
}

/// Demo mode: jumps when an obstacle's hitbox enters a window ahead of the
/// player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Gap between the player's right edge and the hitbox's left edge
    pub lead_min: f32,
    pub lead_max: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            lead_min: 36.0,
            lead_max: 66.0,
        }
    }
}

impl JumpInput for Autopilot {
    fn jump_pressed_this_tick(&mut self, state: &GameState) -> bool {
        if !state.player.can_jump {
            return false;
        }
        let player_right = state.player.sprite.bounds().right();
        state.obstacles.iter().any(|o| {
            let gap = obstacle_hitbox(&o.sprite, state.collision_pad).x - player_right;
            gap > self.lead_min && gap <= self.lead_max
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;

    #[test]
    fn test_scripted_frames() {
        let mut state = GameState::new(&Settings::default()).expect("valid settings");
        let mut input = ScriptedInput::new([0, 3]);
        assert!(input.jump_pressed_this_tick(&state));
        state.time_ticks = 1;
        assert!(!input.jump_pressed_this_tick(&state));
        state.time_ticks = 3;
        assert!(input.jump_pressed_this_tick(&state));
    }

    #[test]
    fn test_autopilot_waits_for_obstacle() {
        let mut state = GameState::new(&Settings::default()).expect("valid settings");
        let mut pilot = Autopilot::default();
        assert!(!pilot.jump_pressed_this_tick(&state));

        state.obstacles.as_mut_slice()[0].sprite.position.x = 610.0;
        assert!(pilot.jump_pressed_this_tick(&state));

        // Airborne: no jump even with an obstacle in range
        state.player.can_jump = false;
        assert!(!pilot.jump_pressed_this_tick(&state));
    }
}
