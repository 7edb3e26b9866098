//! Parallax background scrolling
//!
//! Each layer is drawn twice, at `offset` and `offset + tile_extent`, so the
//! offset only has to wrap after a whole tile has passed.

use serde::{Deserialize, Serialize};

/// Horizontal scroll state of one background layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollLayer {
    /// Current draw offset, in `(-tile_extent, 0]`
    pub offset: f32,
    /// Pixels per second, leftward
    pub speed: f32,
    /// Scaled width of one tile
    pub tile_extent: f32,
}

impl ScrollLayer {
    pub fn new(speed: f32, tile_extent: f32) -> Self {
        Self {
            offset: 0.0,
            speed,
            tile_extent,
        }
    }

    /// Scroll left by `speed * dt`. Returns true when the offset wrapped.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.offset -= self.speed * dt;
        if self.offset <= -self.tile_extent {
            self.offset = 0.0;
            return true;
        }
        false
    }

    /// X positions of the two tile copies
    pub fn tile_positions(&self) -> [f32; 2] {
        [self.offset, self.offset + self.tile_extent]
    }
}

/// Far, back and fore layers, in draw order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallaxLayers {
    pub layers: [ScrollLayer; 3],
}

impl ParallaxLayers {
    pub fn advance(&mut self, dt: f32) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            if layer.advance(dt) {
                log::debug!("Layer {} wrapped", i);
            }
        }
    }
}
