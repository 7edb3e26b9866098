//! Sprite sheet animation
//!
//! Frames advance on a fixed real-time cadence, at most one frame per call.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// One sprite's current animation cell and world placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimatedEntity {
    /// Source region of the current cell; width doubles as the frame stride
    pub frame_box: Rect,
    /// World-space top-left corner
    pub position: Vec2,
    pub frame_index: u32,
    /// Seconds per frame (always > 0, enforced by settings validation)
    pub frame_period: f32,
    pub elapsed_since_frame: f32,
}

impl AnimatedEntity {
    pub fn new(frame_box: Rect, position: Vec2, frame_period: f32) -> Self {
        Self {
            frame_box,
            position,
            frame_index: 0,
            frame_period,
            elapsed_since_frame: 0.0,
        }
    }

    /// World-space bounds of the sprite (no inset)
    pub fn bounds(&self) -> Rect {
        Rect::at(self.position, self.frame_box.width, self.frame_box.height)
    }

    /// Accumulate `dt` and step at most one frame.
    ///
    /// When the period elapses the source x is set from the current index
    /// *before* the index is incremented, so the displayed cell trails the
    /// index by one. A large `dt` still yields a single step.
    pub fn advance(&mut self, dt: f32, max_frame: u32) {
        self.elapsed_since_frame += dt;

        if self.elapsed_since_frame >= self.frame_period {
            self.frame_box.x = self.frame_index as f32 * self.frame_box.width;
            self.frame_index += 1;
            if self.frame_index > max_frame {
                self.frame_index = 0;
            }
            self.elapsed_since_frame = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sprite(period: f32) -> AnimatedEntity {
        AnimatedEntity::new(Rect::new(0.0, 0.0, 128.0, 128.0), Vec2::ZERO, period)
    }

    #[test]
    fn test_no_step_before_period() {
        let mut e = sprite(0.1);
        e.advance(0.05, 5);
        assert_eq!(e.frame_index, 0);
        assert!((e.elapsed_since_frame - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_step_sets_source_then_increments() {
        let mut e = sprite(0.1);
        e.advance(0.1, 5);
        assert_eq!(e.frame_index, 1);
        assert_eq!(e.frame_box.x, 0.0);
        assert_eq!(e.elapsed_since_frame, 0.0);

        e.advance(0.1, 5);
        assert_eq!(e.frame_index, 2);
        assert_eq!(e.frame_box.x, 128.0);
    }

    #[test]
    fn test_wraps_after_max_frame() {
        let mut e = sprite(1.0 / 12.0);
        for _ in 0..6 {
            e.advance(0.1, 5);
        }
        assert_eq!(e.frame_index, 0);
        assert_eq!(e.frame_box.x, 5.0 * 128.0);
    }

    #[test]
    fn test_large_dt_single_step() {
        let mut e = sprite(1.0 / 16.0);
        e.advance(10.0, 7);
        assert_eq!(e.frame_index, 1);
        assert_eq!(e.elapsed_since_frame, 0.0);
    }

    proptest! {
        #[test]
        fn prop_frame_index_bounded(
            max_frame in 0u32..10,
            steps in prop::collection::vec(0.0f32..0.5, 1..200),
        ) {
            let mut e = sprite(1.0 / 12.0);
            for dt in steps {
                let before = e.frame_index;
                e.advance(dt, max_frame);
                prop_assert!(e.frame_index <= max_frame);
                // Either unchanged, +1, or wrapped to zero
                prop_assert!(
                    e.frame_index == before
                        || e.frame_index == before + 1
                        || e.frame_index == 0
                );
                prop_assert!(e.elapsed_since_frame < e.frame_period);
            }
        }
    }
}
