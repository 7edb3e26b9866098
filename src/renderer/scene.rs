//! Scene composition: turns a game state into the frame's draw intents

use glam::Vec2;

use super::intent::{DrawIntent, TextureId, Tint};
use crate::consts::BANNER_SIZE;
use crate::sim::{GameState, Outcome};

/// End-of-run banner text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    GameOver,
    YouWin,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::GameOver => "Game Over!",
            Banner::YouWin => "You Win!",
        }
    }

    /// Top-left of the banner, roughly centred for an 80px font
    pub fn position(&self, window: Vec2) -> Vec2 {
        let half_width = match self {
            Banner::GameOver => 170.0,
            Banner::YouWin => 150.0,
        };
        Vec2::new(window.x / 2.0 - half_width, window.y / 2.0 - 50.0)
    }

    fn intent(&self, window: Vec2) -> DrawIntent {
        DrawIntent::Text {
            text: self.text().to_string(),
            position: self.position(window),
            size: BANNER_SIZE,
            tint: Tint::WHITE,
        }
    }
}

/// Build the frame: parallax layers always, then either the sprites or the
/// outcome banner
pub fn compose(state: &GameState) -> Vec<DrawIntent> {
    let mut intents = Vec::with_capacity(8 + state.obstacles.len());

    for (layer, texture) in state.layers.layers.iter().zip(TextureId::LAYERS) {
        for x in layer.tile_positions() {
            intents.push(DrawIntent::Scaled {
                texture,
                dest: Vec2::new(x, 0.0),
                scale: state.layer_scale,
                tint: Tint::WHITE,
            });
        }
    }

    match state.outcome {
        Outcome::Lost => intents.push(Banner::GameOver.intent(state.window)),
        Outcome::Won => intents.push(Banner::YouWin.intent(state.window)),
        Outcome::Running => {
            for obstacle in state.obstacles.iter() {
                intents.push(DrawIntent::Region {
                    texture: TextureId::Obstacle,
                    source: obstacle.sprite.frame_box,
                    dest: obstacle.sprite.position,
                    tint: Tint::WHITE,
                });
            }
            intents.push(DrawIntent::Region {
                texture: TextureId::Player,
                source: state.player.sprite.frame_box,
                dest: state.player.sprite.position,
                tint: Tint::WHITE,
            });
        }
    }

    intents
}
