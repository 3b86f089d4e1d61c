//! Platform abstraction layer
//!
//! The session driver only talks to these traits:
//! - `Screen`: off-screen cell buffer, presented with `show`
//! - `Input`: non-blocking key poll plus a blocking wait
//! - `Clock`: RNG seed source and the inter-tick delay
//!
//! `terminal` implements all three on top of crossterm.

pub mod terminal;
#[cfg(test)]
pub(crate) mod testing;

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::sim::Key;

pub use terminal::{TerminalInput, TerminalScreen};

pub trait Screen {
    /// Blank the off-screen buffer
    fn clear(&mut self);
    /// Present the buffer
    fn show(&mut self) -> io::Result<()>;
    /// Put one glyph at a cell. Cells outside the screen are ignored.
    fn draw_char(&mut self, x: i32, y: i32, ch: char);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    fn width(&self) -> i32;
    fn height(&self) -> i32;
}

pub trait Input {
    /// Next pending key, or `None` right away if nothing is pending
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
    /// Block until a key is pressed
    fn wait_key(&mut self) -> io::Result<Key>;

    /// Throw away any keys already buffered
    fn drain(&mut self) -> io::Result<()> {
        while self.poll_key()?.is_some() {}
        Ok(())
    }
}

pub trait Clock {
    /// Value used to seed the session RNG
    fn now_seed(&self) -> u64;
    fn sleep(&mut self, duration: Duration);
}

/// Fold a nanosecond count into 64 bits, keeping the high half's entropy
fn fold_nanos(nanos: u128) -> u64 {
    (nanos as u64) ^ ((nanos >> 64) as u64)
}

/// Wall clock with a real blocking sleep
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seed(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| fold_nanos(d.as_nanos()))
            .unwrap_or_default()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_nanos_keeps_high_bits() {
        assert_eq!(fold_nanos(42), 42);
        assert_eq!(fold_nanos(1u128 << 64), 1);
        assert_eq!(fold_nanos((3u128 << 64) | 5), 6);
    }

    #[test]
    fn test_system_clock_seed_is_nonzero() {
        assert_ne!(SystemClock.now_seed(), 0);
    }
}
