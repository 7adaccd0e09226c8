//! Collision and bounds predicates
//!
//! Axis-aligned checks between the bird's bounding box and an obstacle pair's
//! two rectangles, plus the viewport boundary check. All pure functions over
//! post-translation positions.

use glam::Vec2;

use super::state::{Obstacle, Viewport};
use crate::consts::*;

/// Half-open overlap test between `[a_min, a_min + a_len)` and
/// `[b_min, b_min + b_len)`
#[inline]
pub fn spans_overlap(a_min: f32, a_len: f32, b_min: f32, b_len: f32) -> bool {
    a_min < b_min + b_len && a_min + a_len > b_min
}

/// Has the bird left the viewport vertically?
#[inline]
pub fn out_of_bounds(bird_y: f32, viewport_height: f32) -> bool {
    bird_y > viewport_height || bird_y < 0.0
}

/// Does the bird's bounding box intersect either rectangle of the pair?
///
/// Horizontal spans must overlap, and the bird must reach into the top
/// rectangle (`y < top_height`) or the bottom one
/// (`y + BIRD_SIZE > height - bottom_height`).
pub fn bird_hits_obstacle(bird_pos: Vec2, obstacle: &Obstacle, viewport: Viewport) -> bool {
    if !spans_overlap(bird_pos.x, BIRD_SIZE, obstacle.x, OBSTACLE_WIDTH) {
        return false;
    }
    bird_pos.y < obstacle.top_height
        || bird_pos.y + BIRD_SIZE > obstacle.gap_bottom(viewport.height)
}
