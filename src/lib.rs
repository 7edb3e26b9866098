//! Nebula Dash - A parallax side-scrolling runner
//!
//! Core modules:
//! - `sim`: Per-frame simulation (animation, physics, scrolling, collisions, outcome)
//! - `renderer`: Declarative draw intents and the render sink seam
//! - `platform`: Clock/input seams and the session loop
//! - `settings`: Construction-time configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use settings::{LayerSpec, Settings, SheetSpec};

/// Game configuration defaults
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 1080.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    pub const WINDOW_TITLE: &str = "Nebula Dash";
    pub const TARGET_FPS: u32 = 60;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Velocity added by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -600.0;

    /// Player sprite cadence (12 fps) and last frame index
    pub const PLAYER_FRAME_PERIOD: f32 = 1.0 / 12.0;
    pub const PLAYER_MAX_FRAME: u32 = 5;

    /// Obstacle sprite cadence (16 fps) and last frame index
    pub const OBSTACLE_FRAME_PERIOD: f32 = 1.0 / 16.0;
    pub const OBSTACLE_MAX_FRAME: u32 = 7;

    /// Shared horizontal obstacle velocity (pixels/s, leftward)
    pub const OBSTACLE_VELOCITY: f32 = -220.0;
    pub const OBSTACLE_COUNT: usize = 3;
    pub const OBSTACLE_SPACING: f32 = 300.0;
    /// Finish line sits this far past the last obstacle
    pub const FINISH_LEAD: f32 = 200.0;

    /// Obstacle hitbox inset on every side
    pub const COLLISION_PAD: f32 = 50.0;

    /// Parallax layer speeds (far, back, fore) and draw scale
    pub const FAR_LAYER_SPEED: f32 = 100.0;
    pub const BACK_LAYER_SPEED: f32 = 200.0;
    pub const FORE_LAYER_SPEED: f32 = 400.0;
    pub const LAYER_SCALE: f32 = 5.0;

    /// Outcome banner
    pub const BANNER_SIZE: f32 = 80.0;
}
