//! Game settings
//!
//! Construction-time constants for a session. Loaded once (JSON or defaults),
//! validated, then handed to [`crate::sim::GameState::new`]. Nothing here is
//! mutated while a session runs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SettingsError, SimError};
use crate::sim::Rect;

/// Pixel size of an external sprite sheet and the grid it is cut into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub width: u32,
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
}

impl SheetSpec {
    pub const fn new(width: u32, height: u32, columns: u32, rows: u32) -> Self {
        Self {
            width,
            height,
            columns,
            rows,
        }
    }

    /// Every cell must be at least one pixel in each direction
    fn validate(&self, name: &'static str) -> Result<(), SettingsError> {
        if self.columns == 0
            || self.rows == 0
            || self.width < self.columns
            || self.height < self.rows
        {
            return Err(SettingsError::EmptyTexture {
                name,
                width: self.width,
                height: self.height,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }

    /// Source box of the first animation cell
    pub fn frame_box(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            (self.width / self.columns) as f32,
            (self.height / self.rows) as f32,
        )
    }
}

/// One parallax background layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Texture width in pixels (before scaling)
    pub texture_width: u32,
    /// Texture height in pixels (before scaling)
    pub texture_height: u32,
    /// Scroll speed (pixels/s, leftward)
    pub speed: f32,
}

impl LayerSpec {
    pub const fn new(texture_width: u32, texture_height: u32, speed: f32) -> Self {
        Self {
            texture_width,
            texture_height,
            speed,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    pub target_fps: u32,

    // === Physics ===
    pub gravity: f32,
    pub jump_impulse: f32,
    /// Floor line the player stands on (world y)
    pub ground_y: f32,

    // === Sprites ===
    pub player_sheet: SheetSpec,
    pub player_frame_period: f32,
    pub player_max_frame: u32,
    pub obstacle_sheet: SheetSpec,
    pub obstacle_frame_period: f32,
    pub obstacle_max_frame: u32,

    // === Obstacles ===
    pub obstacle_velocity: f32,
    pub obstacle_count: usize,
    pub obstacle_spacing: f32,
    /// World x of the first obstacle
    pub obstacle_start_x: f32,
    pub finish_lead: f32,
    pub collision_pad: f32,

    // === Parallax ===
    /// Far, back and fore layers, in draw order
    pub layers: [LayerSpec; 3],
    pub layer_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            target_fps: TARGET_FPS,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            ground_y: WINDOW_HEIGHT,

            player_sheet: SheetSpec::new(768, 128, 6, 1),
            player_frame_period: PLAYER_FRAME_PERIOD,
            player_max_frame: PLAYER_MAX_FRAME,
            obstacle_sheet: SheetSpec::new(1024, 1024, 8, 8),
            obstacle_frame_period: OBSTACLE_FRAME_PERIOD,
            obstacle_max_frame: OBSTACLE_MAX_FRAME,

            obstacle_velocity: OBSTACLE_VELOCITY,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_start_x: WINDOW_WIDTH,
            finish_lead: FINISH_LEAD,
            collision_pad: COLLISION_PAD,

            layers: [
                LayerSpec::new(272, 160, FAR_LAYER_SPEED),
                LayerSpec::new(272, 160, BACK_LAYER_SPEED),
                LayerSpec::new(352, 160, FORE_LAYER_SPEED),
            ],
            layer_scale: LAYER_SCALE,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from `path` when one is given, otherwise use the defaults.
    /// A file that is missing, malformed or invalid is an error.
    pub fn load_optional(path: Option<impl AsRef<Path>>) -> Result<Self, SimError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_period("player", self.player_frame_period)?;
        check_period("obstacle", self.obstacle_frame_period)?;

        self.player_sheet.validate("player")?;
        self.obstacle_sheet.validate("obstacle")?;
        for (layer, name) in self.layers.iter().zip(["far", "back", "fore"]) {
            SheetSpec::new(layer.texture_width, layer.texture_height, 1, 1).validate(name)?;
        }

        if self.obstacle_count == 0 {
            return Err(SettingsError::NoObstacles);
        }
        if self.target_fps == 0 {
            return Err(SettingsError::InvalidFrameRate);
        }
        if !(self.layer_scale.is_finite() && self.layer_scale > 0.0) {
            return Err(SettingsError::InvalidLayerScale(self.layer_scale));
        }

        let finite = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("ground_y", self.ground_y),
            ("obstacle_velocity", self.obstacle_velocity),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_start_x", self.obstacle_start_x),
            ("finish_lead", self.finish_lead),
            ("collision_pad", self.collision_pad),
            ("far_speed", self.layers[0].speed),
            ("back_speed", self.layers[1].speed),
            ("fore_speed", self.layers[2].speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SettingsError::NonFinite { name, value });
            }
        }

        // Gravity pulls down, jumps push up, obstacles scroll toward the player
        let signs = [
            ("gravity", self.gravity, self.gravity > 0.0, "positive"),
            ("jump_impulse", self.jump_impulse, self.jump_impulse < 0.0, "negative"),
            (
                "obstacle_velocity",
                self.obstacle_velocity,
                self.obstacle_velocity < 0.0,
                "negative",
            ),
            ("collision_pad", self.collision_pad, self.collision_pad >= 0.0, "non-negative"),
        ];
        for (name, value, ok, expected) in signs {
            if !ok {
                return Err(SettingsError::WrongSign {
                    name,
                    value,
                    expected,
                });
            }
        }

        Ok(())
    }

    /// Horizontal extent of one layer tile once scaled
    pub fn tile_extent(&self, layer: usize) -> f32 {
        self.layers[layer].texture_width as f32 * self.layer_scale
    }
}

fn check_period(entity: &'static str, period: f32) -> Result<(), SettingsError> {
    if period.is_finite() && period > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::InvalidFramePeriod { entity, period })
    }
}
