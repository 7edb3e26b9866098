//! Game state and core simulation types
//!
//! Everything a session mutates lives here, owned by one `GameState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::AnimatedEntity;
use super::obstacle::ObstacleSet;
use super::physics::{PhysicsParams, PlayerState};
use super::scroll::{ParallaxLayers, ScrollLayer};
use crate::error::SimError;
use crate::settings::Settings;

/// Result of the run so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    /// Player touched an obstacle. Never reverts.
    Lost,
    /// Finish marker reached the player without a collision
    Won,
}

impl Outcome {
    /// Collision beats reaching the finish line
    pub fn evaluate(collided: bool, player_x: f32, finish_x: f32) -> Self {
        if collided {
            Outcome::Lost
        } else if player_x >= finish_x {
            Outcome::Won
        } else {
            Outcome::Running
        }
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Window size (for banner placement)
    pub window: Vec2,
    pub layers: ParallaxLayers,
    pub layer_scale: f32,
    pub player: PlayerState,
    pub player_max_frame: u32,
    pub physics: PhysicsParams,
    pub obstacles: ObstacleSet,
    pub collision_pad: f32,
    /// Sticky: set on first overlap, never cleared
    pub collided: bool,
    pub outcome: Outcome,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Sum of all tick dt values, seconds
    pub elapsed: f64,
}

impl GameState {
    /// Validate settings and lay out the world
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        settings.validate()?;

        let player_box = settings.player_sheet.frame_box();
        let player_pos = Vec2::new(
            settings.window_width / 2.0 - player_box.width / 2.0,
            settings.ground_y - player_box.height,
        );
        let player = PlayerState::new(AnimatedEntity::new(
            player_box,
            player_pos,
            settings.player_frame_period,
        ));

        let obstacles = ObstacleSet::new(settings);

        let layers = ParallaxLayers {
            layers: [0, 1, 2]
                .map(|i| ScrollLayer::new(settings.layers[i].speed, settings.tile_extent(i))),
        };

        log::info!(
            "World: player at ({}, {}), {} obstacles, finish at {}",
            player_pos.x,
            player_pos.y,
            obstacles.len(),
            obstacles.finish.x
        );

        Ok(Self {
            window: Vec2::new(settings.window_width, settings.window_height),
            layers,
            layer_scale: settings.layer_scale,
            player,
            player_max_frame: settings.player_max_frame,
            physics: PhysicsParams {
                gravity: settings.gravity,
                jump_impulse: settings.jump_impulse,
                ground_y: settings.ground_y,
            },
            obstacles,
            collision_pad: settings.collision_pad,
            collided: false,
            outcome: Outcome::Running,
            time_ticks: 0,
            elapsed: 0.0,
        })
    }

    /// Player's fixed horizontal position
    pub fn player_x(&self) -> f32 {
        self.player.sprite.position.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SettingsError;

    #[test]
    fn test_outcome_priority() {
        assert_eq!(Outcome::evaluate(false, 100.0, 500.0), Outcome::Running);
        assert_eq!(Outcome::evaluate(false, 500.0, 500.0), Outcome::Won);
        assert_eq!(Outcome::evaluate(true, 100.0, 500.0), Outcome::Lost);
        // Both at once: collision wins
        assert_eq!(Outcome::evaluate(true, 600.0, 500.0), Outcome::Lost);
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&Settings::default()).expect("valid settings");
        assert_eq!(state.player.sprite.position, Vec2::new(476.0, 592.0));
        assert!(state.player.on_ground(state.physics.ground_y));
        assert_eq!(state.player.sprite.frame_index, 0);
        assert_eq!(state.obstacles.len(), 3);
        assert_eq!(state.obstacles.as_slice()[0].sprite.position, Vec2::new(1080.0, 592.0));
        assert_eq!(state.obstacles.finish.x, 1880.0);
        assert_eq!(state.outcome, Outcome::Running);
        assert!(!state.collided);
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        let settings = Settings {
            player_frame_period: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(&settings),
            Err(SimError::Settings(SettingsError::InvalidFramePeriod { .. }))
        ));
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(&Settings::default()).expect("valid settings");
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.obstacles.finish, state.obstacles.finish);
    }
}
