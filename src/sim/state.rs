//! World state and core simulation types
//!
//! Everything the simulation mutates lives in `WorldState`, owned by the
//! session driver and handed to `tick` by `&mut`.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::gold::Gold;
use super::hero::Hero;
use super::zombie::Zombie;

/// PCG stream for gold spawns
const GOLD_STREAM: u64 = 0x676f_6c64;
/// PCG stream for zombie spawns
const ZOMBIE_STREAM: u64 = 0x7a6f_6d62;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Player pressed the quit key
    Quit,
    /// Hero health ran out
    HeroDied,
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    Over(EndReason),
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GoldCollected { score: u64 },
    HeroBitten { health: u32 },
    HeroDied,
    Quit,
}

/// Complete world state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct WorldState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub bounds: Bounds,
    pub phase: GamePhase,
    pub hero: Hero,
    pub gold: Gold,
    pub zombie: Zombie,
    pub score: u64,
    /// Completed update ticks
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    #[serde(skip)]
    pub(crate) gold_rng: Pcg32,
    #[serde(skip)]
    pub(crate) zombie_rng: Pcg32,
}

impl WorldState {
    /// Set up a fresh session: hero in the centre, gold and zombie at random cells
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut gold_rng = Pcg32::new(seed, GOLD_STREAM);
        let mut zombie_rng = Pcg32::new(seed, ZOMBIE_STREAM);
        let gold = Gold::spawn(&bounds, &mut gold_rng);
        let zombie = Zombie::spawn(&bounds, &mut zombie_rng);

        Self {
            seed,
            bounds,
            phase: GamePhase::Running,
            hero: Hero::new(&bounds),
            gold,
            zombie,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            gold_rng,
            zombie_rng,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
