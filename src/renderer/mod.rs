//! Frame layout
//!
//! Draws the world onto any `Screen`: border, status band, then the three
//! entities. Entities are drawn in the cell `cell_of` puts them in, the same
//! cell collision uses.

pub mod shapes;

use std::io;

use crate::cell_of;
use crate::consts::{
    BORDER_GLYPH, GOLD_GLYPH, HEADER_ROWS, HERO_GLYPH, STATUS_X, STATUS_Y, ZOMBIE_GLYPH,
};
use crate::platform::Screen;
use crate::sim::WorldState;

/// Lines shown once the hero has died
pub const GAME_OVER_LINES: [&str; 2] = ["Simulation over!", "Press any key to exit..."];

/// Border around the screen plus the line under the status band
pub fn draw_border(screen: &mut impl Screen, width: i32, height: i32) {
    let header = HEADER_ROWS - 1;
    screen.draw_line(0, 0, 0, height - 1, BORDER_GLYPH);
    screen.draw_line(0, 0, width - 1, 0, BORDER_GLYPH);
    screen.draw_line(0, header, width - 1, header, BORDER_GLYPH);
    screen.draw_line(0, height - 1, width - 1, height - 1, BORDER_GLYPH);
    screen.draw_line(width - 1, 0, width - 1, height - 1, BORDER_GLYPH);
}

pub fn status_line(state: &WorldState) -> String {
    format!("Health: {:3}, Score: {:3}", state.hero.health, state.score)
}

/// Draw and present one frame
pub fn draw_frame(screen: &mut impl Screen, state: &WorldState) -> io::Result<()> {
    let bounds = state.bounds;
    screen.clear();
    draw_border(screen, bounds.width, bounds.height);
    screen.draw_text(STATUS_X, STATUS_Y, &status_line(state));

    for (pos, glyph) in [
        (state.hero.pos, HERO_GLYPH),
        (state.gold.pos, GOLD_GLYPH),
        (state.zombie.pos, ZOMBIE_GLYPH),
    ] {
        let cell = cell_of(pos);
        screen.draw_char(cell.x, cell.y, glyph);
    }

    screen.show()
}

/// Clear the screen and centre the game-over message on it
pub fn draw_game_over(screen: &mut impl Screen) -> io::Result<()> {
    let (width, height) = (screen.width(), screen.height());
    let rows = GAME_OVER_LINES.len() as i32;

    screen.clear();
    for (i, line) in GAME_OVER_LINES.iter().enumerate() {
        let x = (width - line.chars().count() as i32) / 2;
        let y = (height - rows) / 2 + i as i32;
        screen.draw_text(x, y, line);
    }
    screen.show()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::RecordingScreen;
    use crate::sim::Bounds;
    use glam::DVec2;

    fn frame_for(state: &WorldState) -> Vec<String> {
        let mut screen = RecordingScreen::new(state.bounds.width, state.bounds.height);
        draw_frame(&mut screen, state).unwrap();
        screen.frames.pop().unwrap()
    }

    #[test]
    fn test_frame_layout() {
        let mut state = WorldState::new(Bounds::new(36, 8).unwrap(), 1);
        state.hero.pos = DVec2::new(3.0, 4.0);
        state.gold.pos = DVec2::new(10.4, 5.6);
        state.zombie.pos = DVec2::new(20.5, 3.2);
        state.score = 7;

        let rows = frame_for(&state);

        assert_eq!(rows[0], "*".repeat(36));
        assert_eq!(rows[1], format!("*{:9}Health: 100, Score:   7  *", ""));
        assert_eq!(rows[2], "*".repeat(36));
        assert_eq!(rows[7], "*".repeat(36));
        assert_eq!(rows[4].chars().nth(3), Some(HERO_GLYPH));
        assert_eq!(rows[6].chars().nth(10), Some(GOLD_GLYPH));
        // 20.5 rounds away from zero
        assert_eq!(rows[3].chars().nth(21), Some(ZOMBIE_GLYPH));
        assert!(rows[3..7].iter().all(|r| r.starts_with('*') && r.ends_with('*')));
    }

    #[test]
    fn test_zombie_drawn_over_hero_on_same_cell() {
        let mut state = WorldState::new(Bounds::new(20, 10).unwrap(), 1);
        state.hero.pos = DVec2::new(5.0, 5.0);
        state.gold.pos = DVec2::new(1.0, 3.0);
        state.zombie.pos = DVec2::new(5.2, 4.9);

        let rows = frame_for(&state);
        assert_eq!(rows[5].chars().nth(5), Some(ZOMBIE_GLYPH));
    }

    #[test]
    fn test_game_over_is_centred() {
        let mut screen = RecordingScreen::new(30, 11);
        draw_game_over(&mut screen).unwrap();
        let rows = screen.frames.pop().unwrap();

        // (11 - 2) / 2 = 4
        assert_eq!(rows[4], format!("{:7}Simulation over!{:7}", "", ""));
        assert_eq!(rows[5], "   Press any key to exit...   ");
        assert!(rows[3].trim().is_empty());
    }
}
