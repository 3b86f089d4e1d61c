//! World bounds for the grid arena
//!
//! Screen layout, in cells:
//! - rows 0..=2: status band (row 1 holds the text, rows 0 and 2 are border)
//! - column 0, column W-1 and row H-1: border
//! - everything else: the interior, where entities live

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::HEADER_ROWS;
use crate::error::GameError;

/// Smallest screen that still leaves one interior cell
pub const MIN_WIDTH: i32 = 3;
pub const MIN_HEIGHT: i32 = HEADER_ROWS + 2;

/// Fixed arena dimensions for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Build bounds from the reported screen size, rejecting screens with no interior
    pub fn new(width: i32, height: i32) -> Result<Self, GameError> {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GameError::ScreenTooSmall {
                width,
                height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        1
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.width - 2
    }

    #[inline]
    pub fn min_y(&self) -> i32 {
        HEADER_ROWS
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.height - 2
    }

    /// Screen centre, using integer division like the cell grid does.
    ///
    /// On screens shorter than 7 rows the centre falls in the status band, so
    /// it is pulled down into the interior.
    pub fn center(&self) -> DVec2 {
        let x = (self.width - 1) / 2;
        let y = (self.height - 1) / 2;
        DVec2::new(
            x.clamp(self.min_x(), self.max_x()) as f64,
            y.clamp(self.min_y(), self.max_y()) as f64,
        )
    }

    /// True if `x` is the left or right border column
    #[inline]
    pub fn is_side_wall(&self, x: i32) -> bool {
        x == 0 || x == self.width - 1
    }

    /// True if `y` is the header's bottom border row or the bottom border row
    #[inline]
    pub fn is_top_or_bottom_wall(&self, y: i32) -> bool {
        y == HEADER_ROWS - 1 || y == self.height - 1
    }

    /// True if the cell lies inside the interior region
    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        (self.min_x()..=self.max_x()).contains(&x) && (self.min_y()..=self.max_y()).contains(&y)
    }

    /// Uniformly random interior cell; x and y are independent draws
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> DVec2 {
        let x = rng.random_range(self.min_x()..=self.max_x());
        let y = rng.random_range(self.min_y()..=self.max_y());
        DVec2::new(x as f64, y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_rejects_screen_without_interior() {
        assert!(matches!(
            Bounds::new(2, 40),
            Err(GameError::ScreenTooSmall { width: 2, .. })
        ));
        assert!(matches!(
            Bounds::new(80, 4),
            Err(GameError::ScreenTooSmall { height: 4, .. })
        ));
    }

    #[test]
    fn test_minimum_screen_has_one_interior_cell() {
        let bounds = Bounds::new(MIN_WIDTH, MIN_HEIGHT).unwrap();
        assert_eq!((bounds.min_x(), bounds.max_x()), (1, 1));
        assert_eq!((bounds.min_y(), bounds.max_y()), (3, 3));

        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(bounds.random_cell(&mut rng), DVec2::new(1.0, 3.0));
        }
    }

    #[test]
    fn test_center_uses_integer_division() {
        let bounds = Bounds::new(80, 24).unwrap();
        assert_eq!(bounds.center(), DVec2::new(39.0, 11.0));
    }

    #[test]
    fn test_center_on_short_screen_is_inside() {
        let bounds = Bounds::new(10, 6).unwrap();
        assert_eq!(bounds.center(), DVec2::new(4.0, 3.0));
    }

    #[test]
    fn test_walls() {
        let bounds = Bounds::new(20, 10).unwrap();
        assert!(bounds.is_side_wall(0));
        assert!(bounds.is_side_wall(19));
        assert!(!bounds.is_side_wall(1));
        assert!(bounds.is_top_or_bottom_wall(2));
        assert!(bounds.is_top_or_bottom_wall(9));
        assert!(!bounds.is_top_or_bottom_wall(3));
        assert!(!bounds.is_top_or_bottom_wall(0));
    }

    #[test]
    fn test_random_cell_stays_inside() {
        let bounds = Bounds::new(12, 9).unwrap();
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..1000 {
            let p = bounds.random_cell(&mut rng);
            assert!(bounds.contains_cell(p.x as i32, p.y as i32), "{p:?}");
            assert_eq!(p, p.round());
        }
    }
}
