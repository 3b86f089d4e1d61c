//! The gold pickup

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::collision::collided;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gold {
    pub pos: DVec2,
}

impl Gold {
    pub fn spawn<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Self {
        Self {
            pos: bounds.random_cell(rng),
        }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        self.pos = bounds.random_cell(rng);
    }

    /// Check for pickup by the hero. On collision the score goes up by one
    /// and the gold moves to a fresh random cell. Returns true if collected.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        hero_pos: DVec2,
        score: &mut u64,
        bounds: &Bounds,
        rng: &mut R,
    ) -> bool {
        if !collided(hero_pos, self.pos) {
            return false;
        }
        *score += 1;
        self.respawn(bounds, rng);
        true
    }
}
