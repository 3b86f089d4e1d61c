//! The bouncing zombie
//!
//! The zombie drifts at a constant speed in a random direction and reflects
//! off the border. Movement only happens on idle ticks (no key pressed), so
//! a player holding keys effectively freezes it.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::collision::collided;
use super::hero::Hero;
use crate::cell_of;
use crate::consts::ZOMBIE_STEP;

/// Outcome of the zombie's contact check for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// No contact with the hero
    Clear,
    /// Hero was bitten and survived
    Bitten,
    /// Hero was bitten and has no health left
    Fatal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl Zombie {
    /// Random interior cell, random heading, fixed speed
    pub fn spawn<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Self {
        let pos = bounds.random_cell(rng);
        let heading = rng.random_range(0.0..std::f64::consts::TAU);
        Self {
            pos,
            vel: DVec2::from_angle(heading) * ZOMBIE_STEP,
        }
    }

    pub fn respawn<R: Rng + ?Sized>(&mut self, bounds: &Bounds, rng: &mut R) {
        *self = Self::spawn(bounds, rng);
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// Advance one step, reflecting off the border.
    ///
    /// The cell the zombie would land in is predicted first. If that cell is
    /// on a side wall dx flips, if it is on the header or bottom wall dy flips;
    /// both can flip on a corner. On a tick with any flip the zombie stays put
    /// and coasts away on the next tick. Returns true if it bounced.
    pub fn step(&mut self, bounds: &Bounds) -> bool {
        let next = cell_of(self.pos + self.vel);
        let mut bounced = false;

        if bounds.is_side_wall(next.x) {
            self.vel.x = -self.vel.x;
            bounced = true;
        }

        if bounds.is_top_or_bottom_wall(next.y) {
            self.vel.y = -self.vel.y;
            bounced = true;
        }

        if !bounced {
            self.pos += self.vel;
        }
        bounced
    }

    /// Move on idle ticks, then check for contact with the hero.
    ///
    /// Contact is checked whether or not the zombie moved. On contact the
    /// zombie respawns elsewhere and the hero loses one health point.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        idle: bool,
        hero: &mut Hero,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Contact {
        if idle {
            self.step(bounds);
        }

        if !collided(hero.pos, self.pos) {
            return Contact::Clear;
        }

        self.respawn(bounds, rng);
        if hero.take_hit() {
            Contact::Fatal
        } else {
            Contact::Bitten
        }
    }
}
