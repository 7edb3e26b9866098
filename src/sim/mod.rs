//! Per-frame simulation module
//!
//! All gameplay logic lives here. No rendering, windowing or input polling:
//! - Variable timestep (measured frame time)
//! - Stable iteration order (obstacles by index)
//! - Single owner, mutated in a fixed order once per tick

pub mod anim;
pub mod collision;
pub mod geom;
pub mod obstacle;
pub mod physics;
pub mod scroll;
pub mod state;
pub mod tick;

pub use anim::AnimatedEntity;
pub use collision::{first_hit, obstacle_hitbox, player_hitbox};
pub use geom::Rect;
pub use obstacle::{FinishMarker, Obstacle, ObstacleSet};
pub use physics::{PhysicsParams, PlayerState};
pub use scroll::{ParallaxLayers, ScrollLayer};
pub use state::{GameState, Outcome};
pub use tick::{TickInput, tick};
