//! Draw intents and sinks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// External textures the scene refers to. Loading and lifetime are the
/// sink's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    FarBuildings,
    BackBuildings,
    Foreground,
    Player,
    Obstacle,
}

impl TextureId {
    /// Parallax layer textures, far to near
    pub const LAYERS: [TextureId; 3] = [
        TextureId::FarBuildings,
        TextureId::BackBuildings,
        TextureId::Foreground,
    ];
}

/// RGBA8 color multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint(pub [u8; 4]);

impl Tint {
    pub const WHITE: Tint = Tint([255, 255, 255, 255]);
}

/// One draw call, described rather than performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawIntent {
    /// Sub-region of a sprite sheet at `dest`
    Region {
        texture: TextureId,
        source: Rect,
        dest: Vec2,
        tint: Tint,
    },
    /// Whole texture scaled uniformly at `dest`
    Scaled {
        texture: TextureId,
        dest: Vec2,
        scale: f32,
        tint: Tint,
    },
    Text {
        text: String,
        position: Vec2,
        size: f32,
        tint: Tint,
    },
}

/// Receiver of per-tick draw intents
pub trait RenderSink {
    fn draw_region(&mut self, texture: TextureId, source: Rect, dest: Vec2, tint: Tint);
    fn draw_scaled(&mut self, texture: TextureId, dest: Vec2, scale: f32, tint: Tint);
    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, tint: Tint);

    /// Dispatch a frame's intents in order
    fn submit(&mut self, intents: &[DrawIntent]) {
        for intent in intents {
            match intent {
                DrawIntent::Region {
                    texture,
                    source,
                    dest,
                    tint,
                } => self.draw_region(*texture, *source, *dest, *tint),
                DrawIntent::Scaled {
                    texture,
                    dest,
                    scale,
                    tint,
                } => self.draw_scaled(*texture, *dest, *scale, *tint),
                DrawIntent::Text {
                    text,
                    position,
                    size,
                    tint,
                } => self.draw_text(text, *position, *size, *tint),
            }
        }
    }
}

/// Keeps the most recent frame's intents (headless runs, tests)
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frame: Vec<DrawIntent>,
    pub frames_submitted: u64,
}

impl RenderSink for RecordingSink {
    fn draw_region(&mut self, texture: TextureId, source: Rect, dest: Vec2, tint: Tint) {
        self.frame.push(DrawIntent::Region {
            texture,
            source,
            dest,
            tint,
        });
    }

    fn draw_scaled(&mut self, texture: TextureId, dest: Vec2, scale: f32, tint: Tint) {
        self.frame.push(DrawIntent::Scaled {
            texture,
            dest,
            scale,
            tint,
        });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, tint: Tint) {
        self.frame.push(DrawIntent::Text {
            text: text.to_string(),
            position,
            size,
            tint,
        });
    }

    fn submit(&mut self, intents: &[DrawIntent]) {
        self.frame.clear();
        self.frame.extend_from_slice(intents);
        self.frames_submitted += 1;
    }
}

/// Writes every intent to the log at trace level
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn draw_region(&mut self, texture: TextureId, source: Rect, dest: Vec2, _tint: Tint) {
        log::trace!("region {:?} src=({}, {}) at {}", texture, source.x, source.y, dest);
    }

    fn draw_scaled(&mut self, texture: TextureId, dest: Vec2, scale: f32, _tint: Tint) {
        log::trace!("scaled {:?} x{} at {}", texture, scale, dest);
    }

    fn draw_text(&mut self, text: &str, position: Vec2, size: f32, _tint: Tint) {
        log::trace!("text {:?} size {} at {}", text, size, position);
    }
}
