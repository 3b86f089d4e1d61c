//! The player-controlled hero

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::tick::Key;
use crate::consts::MAX_HEALTH;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub pos: DVec2,
    pub health: u32,
}

impl Hero {
    /// Hero at the centre of the arena with full health
    pub fn new(bounds: &Bounds) -> Self {
        Self {
            pos: bounds.center(),
            health: MAX_HEALTH,
        }
    }

    /// Move one cell for a direction key.
    ///
    /// The bounds check happens before the move: a step that would leave the
    /// interior is dropped, not clamped.
    pub fn update(&mut self, key: Option<Key>, bounds: &Bounds) {
        match key {
            Some(Key::Left) if self.pos.x > bounds.min_x() as f64 => self.pos.x -= 1.0,
            Some(Key::Right) if self.pos.x < bounds.max_x() as f64 => self.pos.x += 1.0,
            Some(Key::Down) if self.pos.y < bounds.max_y() as f64 => self.pos.y += 1.0,
            Some(Key::Up) if self.pos.y > bounds.min_y() as f64 => self.pos.y -= 1.0,
            _ => {}
        }
    }

    /// Lose one point of health. Returns true once health is exhausted.
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.is_dead()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}
