//! Fixed tick simulation step
//!
//! Advances the world by one tick: quit handling, then the hero, gold and
//! zombie controllers in that order. Gold and zombie contact checks rely on
//! the hero having already moved this tick.

use serde::{Deserialize, Serialize};

use super::state::{EndReason, GameEvent, GamePhase, WorldState};
use super::zombie::Contact;

/// A key press delivered by the input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Quit,
    Other(char),
}

/// Input for a single tick (at most one key)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub key: Option<Key>,
}

impl TickInput {
    pub fn new(key: Option<Key>) -> Self {
        Self { key }
    }

    /// No key was pressed this tick. The zombie only moves on idle ticks.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.key.is_none()
    }

    #[inline]
    pub fn is_quit(&self) -> bool {
        self.key == Some(Key::Quit)
    }
}

/// Advance the world state by one tick
pub fn tick(state: &mut WorldState, input: &TickInput) {
    state.events.clear();

    if !state.is_running() {
        return;
    }

    if input.is_quit() {
        state.phase = GamePhase::Over(EndReason::Quit);
        state.events.push(GameEvent::Quit);
        return;
    }

    state.time_ticks += 1;
    let bounds = state.bounds;

    state.hero.update(input.key, &bounds);

    if state
        .gold
        .update(state.hero.pos, &mut state.score, &bounds, &mut state.gold_rng)
    {
        state.events.push(GameEvent::GoldCollected { score: state.score });
    }

    match state.zombie.update(
        input.is_idle(),
        &mut state.hero,
        &bounds,
        &mut state.zombie_rng,
    ) {
        Contact::Clear => {}
        Contact::Bitten => state.events.push(GameEvent::HeroBitten {
            health: state.hero.health,
        }),
        Contact::Fatal => {
            state.events.push(GameEvent::HeroBitten { health: 0 });
            state.events.push(GameEvent::HeroDied);
            state.phase = GamePhase::Over(EndReason::HeroDied);
        }
    }
}
