//! Player vs obstacle collision
//!
//! Obstacle sprites have transparent margins, so their hitbox is inset by a
//! fixed pad on every side. The player's hitbox is its full sprite bounds.

use super::anim::AnimatedEntity;
use super::geom::Rect;
use super::obstacle::Obstacle;

/// Obstacle hitbox shrunk by `pad`. Degenerate when the frame is smaller
/// than twice the pad; such a box never collides.
pub fn obstacle_hitbox(sprite: &AnimatedEntity, pad: f32) -> Rect {
    sprite.bounds().inset(pad)
}

pub fn player_hitbox(sprite: &AnimatedEntity) -> Rect {
    sprite.bounds()
}

/// Index of the first obstacle overlapping the player, if any
pub fn first_hit(player: &AnimatedEntity, obstacles: &[Obstacle], pad: f32) -> Option<usize> {
    let player_box = player_hitbox(player);
    obstacles
        .iter()
        .position(|o| obstacle_hitbox(&o.sprite, pad).overlaps(&player_box))
}
