//! Session driver
//!
//! Owns the world state and the three backends, and runs the fixed-tick
//! loop: draw, poll one key, tick, then either sleep or finish.

use serde::Serialize;

use crate::consts::TICK_DELAY;
use crate::error::GameError;
use crate::platform::{Clock, Input, Screen};
use crate::renderer;
use crate::sim::{Bounds, EndReason, GameEvent, GamePhase, TickInput, WorldState, tick};

/// What a finished session looked like
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u64,
    pub health: u32,
    pub reason: EndReason,
}

pub struct Game<S, I, C> {
    screen: S,
    input: I,
    clock: C,
    state: WorldState,
}

impl<S: Screen, I: Input, C: Clock> Game<S, I, C> {
    /// Size the world from the screen and seed it from `seed`, or from the
    /// clock when no seed is given.
    pub fn new(screen: S, input: I, clock: C, seed: Option<u64>) -> Result<Self, GameError> {
        let bounds = Bounds::new(screen.width(), screen.height())?;
        let seed = seed.unwrap_or_else(|| clock.now_seed());
        log::info!(
            "new session: {}x{} cells, seed {seed}",
            bounds.width,
            bounds.height
        );

        Ok(Self {
            screen,
            input,
            clock,
            state: WorldState::new(bounds, seed),
        })
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut WorldState {
        &mut self.state
    }

    #[cfg(test)]
    pub(crate) fn backends(&self) -> (&S, &I, &C) {
        (&self.screen, &self.input, &self.clock)
    }

    /// Run ticks until the player quits or the hero dies
    pub fn run(&mut self) -> Result<SessionSummary, GameError> {
        while self.state.is_running() {
            self.step()?;
        }

        let summary = self.summary();
        log::info!(
            "session over after {} ticks: {:?}, score {}",
            summary.ticks,
            summary.reason,
            summary.score
        );
        Ok(summary)
    }

    /// One pass of the loop
    pub fn step(&mut self) -> Result<(), GameError> {
        renderer::draw_frame(&mut self.screen, &self.state)?;

        let key = self.input.poll_key()?;
        tick(&mut self.state, &TickInput::new(key));
        self.log_events();

        match self.state.phase {
            GamePhase::Running => self.clock.sleep(TICK_DELAY),
            GamePhase::Over(EndReason::HeroDied) => {
                renderer::draw_game_over(&mut self.screen)?;
                self.input.drain()?;
                let key = self.input.wait_key()?;
                log::debug!("game over dismissed with {key:?}");
            }
            GamePhase::Over(EndReason::Quit) => {}
        }
        Ok(())
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::GoldCollected { score } => {
                    log::debug!("tick {}: gold collected, score {score}", self.state.time_ticks)
                }
                GameEvent::HeroBitten { health } => {
                    log::debug!("tick {}: hero bitten, health {health}", self.state.time_ticks)
                }
                GameEvent::HeroDied => log::info!("tick {}: hero died", self.state.time_ticks),
                GameEvent::Quit => log::info!("quit requested"),
            }
        }
    }

    /// Summary of the session so far. The reason is `Quit` while still running.
    pub fn summary(&self) -> SessionSummary {
        let reason = match self.state.phase {
            GamePhase::Over(reason) => reason,
            GamePhase::Running => EndReason::Quit,
        };
        SessionSummary {
            seed: self.state.seed,
            ticks: self.state.time_ticks,
            score: self.state.score,
            health: self.state.hero.health,
            reason,
        }
    }
}
