//! Axis-aligned hitboxes and the overlap predicate
//!
//! Collisions are tested against boxes inset by a fixed margin on all sides,
//! so grazing contact is forgiving rather than pixel-exact.

use crate::consts::HITBOX_MARGIN;

/// Axis-aligned bounding box, top-left origin in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Shrink the box by `margin` on all four sides
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: self.w - 2.0 * margin,
            h: self.h - 2.0 * margin,
        }
    }

    /// Strict rectangle overlap. Boxes that only touch at an edge do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Hit test between player and obstacle with the forgiving margin applied
/// to both boxes.
pub fn hitboxes_collide(player: &Aabb, obstacle: &Aabb) -> bool {
    player
        .inset(HITBOX_MARGIN)
        .overlaps(&obstacle.inset(HITBOX_MARGIN))
}
