//! In-memory backends for driving sessions in tests

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use glam::IVec2;

use super::terminal::CellBuffer;
use super::{Clock, Input, Screen};
use crate::sim::Key;

/// Screen that keeps a copy of every presented frame, as rows of text
pub struct RecordingScreen {
    buffer: CellBuffer,
    pub frames: Vec<Vec<String>>,
}

impl RecordingScreen {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            buffer: CellBuffer::new(width, height),
            frames: Vec::new(),
        }
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn show(&mut self) -> io::Result<()> {
        let rows = (0..self.buffer.height()).map(|y| self.buffer.row(y)).collect();
        self.frames.push(rows);
        Ok(())
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: char) {
        self.buffer.put(x, y, ch);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, ch: char) {
        self.buffer.line(IVec2::new(x0, y0), IVec2::new(x1, y1), ch);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.buffer.text(x, y, text);
    }

    fn width(&self) -> i32 {
        self.buffer.width()
    }

    fn height(&self) -> i32 {
        self.buffer.height()
    }
}

/// One scripted poll result per tick; `None` entries are idle ticks
#[derive(Debug, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Option<Key>>,
    pub drains: usize,
    pub waits: usize,
}

impl ScriptedInput {
    pub fn new(keys: Vec<Option<Key>>) -> Self {
        Self {
            keys: keys.into(),
            ..Default::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl Input for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.keys.pop_front().flatten())
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        self.waits += 1;
        Ok(Key::Other(' '))
    }

    fn drain(&mut self) -> io::Result<()> {
        self.drains += 1;
        self.keys.clear();
        Ok(())
    }
}

/// Clock that records sleeps instead of blocking
#[derive(Debug, Default)]
pub struct FakeClock {
    seed: u64,
    pub sleeps: Vec<Duration>,
}

impl FakeClock {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            sleeps: Vec::new(),
        }
    }
}

impl Clock for FakeClock {
    fn now_seed(&self) -> u64 {
        self.seed
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
