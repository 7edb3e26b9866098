//! Player vertical physics
//!
//! Ground test, gravity, jump impulse and integration, in that order, once per
//! tick. The player never moves horizontally.

use serde::{Deserialize, Serialize};

use super::anim::AnimatedEntity;

/// Constants driving the player's vertical motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Downward acceleration, positive
    pub gravity: f32,
    /// Velocity added on jump, negative (upward)
    pub jump_impulse: f32,
    /// World floor line
    pub ground_y: f32,
}

/// The controllable character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub sprite: AnimatedEntity,
    pub vertical_velocity: f32,
    /// Ground contact as of the latest physics step
    pub can_jump: bool,
}

impl PlayerState {
    pub fn new(sprite: AnimatedEntity) -> Self {
        Self {
            sprite,
            vertical_velocity: 0.0,
            can_jump: true,
        }
    }

    /// Feet at or below the floor line
    pub fn on_ground(&self, ground_y: f32) -> bool {
        self.sprite.position.y >= ground_y - self.sprite.frame_box.height
    }

    /// Advance vertical motion by one tick
    pub fn step(&mut self, jump_pressed: bool, dt: f32, params: &PhysicsParams) {
        if self.on_ground(params.ground_y) {
            self.vertical_velocity = 0.0;
            self.can_jump = true;
        } else {
            self.vertical_velocity += params.gravity * dt;
            self.can_jump = false;
        }

        // No re-check of ground contact after the impulse
        if jump_pressed && self.can_jump {
            self.vertical_velocity += params.jump_impulse;
            log::debug!("Jump at y={:.1}", self.sprite.position.y);
        }

        self.sprite.position.y += self.vertical_velocity * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use glam::Vec2;

    const PARAMS: PhysicsParams = PhysicsParams {
        gravity: 1000.0,
        jump_impulse: -600.0,
        ground_y: 720.0,
    };

    fn player_at(y: f32) -> PlayerState {
        PlayerState::new(AnimatedEntity::new(
            Rect::new(0.0, 0.0, 120.0, 120.0),
            Vec2::new(480.0, y),
            1.0 / 12.0,
        ))
    }

    #[test]
    fn test_ground_contact_is_exact() {
        assert!(player_at(600.0).on_ground(720.0));
        assert!(!player_at(599.999).on_ground(720.0));
        assert!(player_at(600.5).on_ground(720.0));
    }

    #[test]
    fn test_grounded_player_rests() {
        let mut p = player_at(600.0);
        p.vertical_velocity = 123.0;
        p.step(false, 1.0 / 60.0, &PARAMS);
        assert_eq!(p.vertical_velocity, 0.0);
        assert!(p.can_jump);
        assert_eq!(p.sprite.position.y, 600.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut p = player_at(600.0);
        let dt = 1.0 / 60.0;
        p.step(true, dt, &PARAMS);
        assert_eq!(p.vertical_velocity, -600.0);
        assert!((p.sprite.position.y - (600.0 - 10.0)).abs() < 1e-3);

        // Airborne from here on
        p.step(false, dt, &PARAMS);
        assert!(!p.can_jump);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut p = player_at(400.0);
        let dt = 1.0 / 60.0;
        p.step(true, dt, &PARAMS);
        assert!(!p.can_jump);
        assert!((p.vertical_velocity - 1000.0 * dt).abs() < 1e-4);
    }

    #[test]
    fn test_falling_velocity_increases_until_landing() {
        let mut p = player_at(300.0);
        let dt = 1.0 / 60.0;
        let mut last = p.vertical_velocity;
        let mut landed = false;
        for _ in 0..600 {
            p.step(false, dt, &PARAMS);
            if p.can_jump {
                landed = true;
                break;
            }
            assert!(p.vertical_velocity > last);
            last = p.vertical_velocity;
        }
        assert!(landed);
        assert_eq!(p.vertical_velocity, 0.0);
    }
}
