//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - Fixed controller order (hero, gold, zombie)
//! - No rendering or platform dependencies

pub mod bounds;
pub mod collision;
pub mod gold;
pub mod hero;
pub mod state;
pub mod tick;
pub mod zombie;

pub use bounds::Bounds;
pub use collision::collided;
pub use gold::Gold;
pub use hero::Hero;
pub use state::{EndReason, GameEvent, GamePhase, WorldState};
pub use tick::{Key, TickInput, tick};
pub use zombie::{Contact, Zombie};
