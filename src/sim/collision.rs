//! Collision detection for single-cell entities
//!
//! Entities are points; two of them collide when they round to the same
//! screen cell. Sub-cell distance never matters.

use glam::DVec2;

use crate::cell_of;

/// Returns true if and only if both positions round to the same cell
#[inline]
pub fn collided(a: DVec2, b: DVec2) -> bool {
    cell_of(a) == cell_of(b)
}
