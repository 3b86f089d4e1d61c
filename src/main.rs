//! Zombie Gold entry point
//!
//! Sets up logging, takes over the terminal and runs one session.

use std::env;
use std::fs::OpenOptions;

use zombie_gold::consts::{LOG_FILE_ENV_VAR, SEED_ENV_VAR};
use zombie_gold::platform::{SystemClock, TerminalInput, TerminalScreen};
use zombie_gold::{Game, GameError};

/// Logs go to the file named by `ZOMBIE_GOLD_LOG` when set, since stderr
/// shares the terminal with the game.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Ok(path) = env::var(LOG_FILE_ENV_VAR) {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("cannot open log file {path}: {e}"),
        }
    }

    builder.init();
}

fn seed_override() -> Option<u64> {
    let raw = env::var(SEED_ENV_VAR).ok()?;
    match raw.trim().parse() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("ignoring {SEED_ENV_VAR}={raw:?}: {e}");
            None
        }
    }
}

fn main() -> Result<(), GameError> {
    init_logging();
    log::info!("Zombie Gold starting...");

    // The screen restores the terminal when dropped at the end of this block
    let summary = {
        let screen = TerminalScreen::new()?;
        let mut game = Game::new(screen, TerminalInput, SystemClock, seed_override())?;
        game.run()?
    };

    match serde_json::to_string(&summary) {
        Ok(json) => log::info!("summary: {json}"),
        Err(e) => log::warn!("could not encode summary: {e}"),
    }
    println!(
        "Score: {}, health: {}, ticks: {} (seed {})",
        summary.score, summary.health, summary.ticks, summary.seed
    );
    Ok(())
}
