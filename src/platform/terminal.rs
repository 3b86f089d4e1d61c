//! crossterm terminal backend
//!
//! `TerminalScreen` owns the terminal for its lifetime: raw mode and the
//! alternate screen are entered on construction and restored on drop.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{cursor, execute, queue, style, terminal};
use glam::IVec2;

use super::{Input, Screen};
use crate::renderer::shapes::line_cells;
use crate::sim::Key;

/// Off-screen grid of glyphs, one `char` per terminal cell
#[derive(Debug, Clone)]
pub struct CellBuffer {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl CellBuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![' '; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn line(&mut self, from: IVec2, to: IVec2, ch: char) {
        for cell in line_cells(from, to) {
            self.put(cell.x, cell.y, ch);
        }
    }

    /// Write text left to right from `(x, y)`, clipped at the screen edge
    pub fn text(&mut self, x: i32, y: i32, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch);
        }
    }

    /// Row `y` as a string
    pub fn row(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .collect()
    }
}

/// Raw mode, held for as long as this value lives
struct RawMode {
    disable: fn() -> io::Result<()>,
}

impl RawMode {
    fn enable() -> io::Result<Self> {
        Self::enable_with(terminal::enable_raw_mode, terminal::disable_raw_mode)
    }

    fn enable_with(
        enable: fn() -> io::Result<()>,
        disable: fn() -> io::Result<()>,
    ) -> io::Result<Self> {
        enable()?;
        Ok(Self { disable })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = (self.disable)();
    }
}

/// Full-screen terminal renderer
pub struct TerminalScreen {
    out: Stdout,
    buffer: CellBuffer,
    // Dropped after `TerminalScreen::drop` has left the alternate screen
    _raw_mode: RawMode,
}

impl TerminalScreen {
    /// Take over the terminal and size the buffer to it
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;

        let mut screen = Self {
            out: io::stdout(),
            buffer: CellBuffer::new(i32::from(cols), i32::from(rows)),
            _raw_mode: RawMode::enable()?,
        };
        // On failure `screen` is dropped, which restores the terminal
        execute!(
            screen.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All)
        )?;
        log::debug!("terminal backend started at {cols}x{rows}");

        Ok(screen)
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
            style::ResetColor
        );
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn show(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::BeginSynchronizedUpdate)?;
        for y in 0..self.buffer.height() {
            queue!(
                self.out,
                cursor::MoveTo(0, y as u16),
                style::Print(self.buffer.row(y))
            )?;
        }
        queue!(self.out, terminal::EndSynchronizedUpdate)?;
        self.out.flush()
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

/// Map a crossterm key event to a game key. Releases and repeats are dropped.
pub fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char('a') | KeyCode::Left => Key::Left,
        KeyCode::Char('d') | KeyCode::Right => Key::Right,
        KeyCode::Char('w') | KeyCode::Up => Key::Up,
        KeyCode::Char('s') | KeyCode::Down => Key::Down,
        KeyCode::Char('q') => Key::Quit,
        KeyCode::Char(c) => Key::Other(c),
        KeyCode::Enter => Key::Other('\n'),
        KeyCode::Esc => Key::Other('\u{1b}'),
        _ => Key::Other('\0'),
    };
    Some(key)
}

/// Keyboard input from the terminal event queue
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalInput;

impl Input for TerminalInput {
    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = map_key(key_event) {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }

    fn wait_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = map_key(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}
