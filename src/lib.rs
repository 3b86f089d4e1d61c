//! Zombie Gold - a fixed-tick terminal grid game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, world state)
//! - `game`: Session driver (render, poll, tick, sleep)
//! - `renderer`: Frame layout on top of the `Screen` backend
//! - `platform`: Screen/input/clock traits and the crossterm terminal backend

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use error::GameError;
pub use game::{Game, SessionSummary};

use glam::{DVec2, IVec2};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed delay between simulation ticks
    pub const TICK_DELAY: Duration = Duration::from_millis(10);

    /// Rows reserved at the top of the screen for the status band (rows 0-2)
    pub const HEADER_ROWS: i32 = 3;

    /// Hero defaults
    pub const MAX_HEALTH: u32 = 100;

    /// Zombie speed in cells per tick
    pub const ZOMBIE_STEP: f64 = 0.1;

    /// Glyphs
    pub const HERO_GLYPH: char = 'H';
    pub const ZOMBIE_GLYPH: char = 'Z';
    pub const GOLD_GLYPH: char = 'G';
    pub const BORDER_GLYPH: char = '*';

    /// Status line anchor
    pub const STATUS_X: i32 = 10;
    pub const STATUS_Y: i32 = 1;

    /// Environment variables read by the binary
    pub const SEED_ENV_VAR: &str = "ZOMBIE_GOLD_SEED";
    pub const LOG_FILE_ENV_VAR: &str = "ZOMBIE_GOLD_LOG";
}

/// Screen cell occupied by a continuous position.
///
/// Collision and drawing both go through this, so an entity is always drawn
/// in the cell it collides in.
#[inline]
pub fn cell_of(pos: DVec2) -> IVec2 {
    pos.round().as_ivec2()
}
