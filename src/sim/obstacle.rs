//! Moving obstacles and the finish line
//!
//! Obstacles share one horizontal velocity and scroll toward the player. The
//! finish marker scrolls with them so the run ends in finite time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::anim::AnimatedEntity;
use crate::settings::Settings;

/// An animated obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub sprite: AnimatedEntity,
}

/// Scalar x threshold the player must reach to win
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishMarker {
    pub x: f32,
}

/// Fixed-size, ordered obstacle collection plus the trailing finish marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    /// Length fixed at construction
    obstacles: Box<[Obstacle]>,
    /// Shared horizontal velocity (negative, leftward)
    pub velocity: f32,
    pub max_frame: u32,
    pub finish: FinishMarker,
}

impl ObstacleSet {
    /// Lay out the configured obstacles on the ground line, `obstacle_spacing`
    /// apart, with the finish marker `finish_lead` past the last one
    pub fn new(settings: &Settings) -> Self {
        let frame_box = settings.obstacle_sheet.frame_box();
        let y = settings.ground_y - frame_box.height;

        let obstacles: Box<[Obstacle]> = (0..settings.obstacle_count)
            .map(|i| Obstacle {
                sprite: AnimatedEntity::new(
                    frame_box,
                    Vec2::new(
                        settings.obstacle_start_x + i as f32 * settings.obstacle_spacing,
                        y,
                    ),
                    settings.obstacle_frame_period,
                ),
            })
            .collect();

        let last_x = obstacles
            .last()
            .map(|o| o.sprite.position.x)
            .unwrap_or(settings.obstacle_start_x);

        Self {
            obstacles,
            velocity: settings.obstacle_velocity,
            max_frame: settings.obstacle_max_frame,
            finish: FinishMarker {
                x: last_x + settings.finish_lead,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    /// Move and animate every obstacle, then scroll the finish marker
    pub fn advance(&mut self, dt: f32) {
        let dx = self.velocity * dt;
        for obstacle in self.obstacles.iter_mut() {
            obstacle.sprite.position.x += dx;
            obstacle.sprite.advance(dt, self.max_frame);
        }
        self.finish.x += dx;
    }
}
