//! Render seam
//!
//! The simulation never draws pixels. Each tick produces a list of
//! declarative [`DrawIntent`]s that an external sink turns into draw calls.

pub mod intent;
pub mod scene;

pub use intent::{DrawIntent, LogSink, RecordingSink, RenderSink, TextureId, Tint};
pub use scene::{compose, Banner};
