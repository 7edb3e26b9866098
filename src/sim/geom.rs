//! Axis-aligned rectangle geometry
//!
//! A `Rect` is used both as a sprite sheet source region and as world-space
//! sprite bounds (hitboxes).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size placed at `pos`
    pub fn at(pos: Vec2, width: f32, height: f32) -> Self {
        Self::new(pos.x, pos.y, width, height)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `pad` on every side. May produce negative extents.
    pub fn inset(&self, pad: f32) -> Self {
        Self::new(
            self.x + pad,
            self.y + pad,
            self.width - 2.0 * pad,
            self.height - 2.0 * pad,
        )
    }

    /// True when either extent is zero or negative
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Overlap test with a non-empty intersection required.
    ///
    /// Touching edges do not count, and a degenerate rectangle never
    /// overlaps anything.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
