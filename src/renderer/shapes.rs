//! Cell rasterisation for 2D primitives

use glam::IVec2;

/// Cells covered by the line from `from` to `to`, endpoints included.
///
/// Integer Bresenham, so any direction and slope works. Backends use this to
/// implement `Screen::draw_line` on top of single-cell drawing.
pub fn line_cells(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut cur = from;
    let mut err = dx + dy;

    loop {
        cells.push(cur);
        if cur == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            cur.x += step_x;
        }
        if e2 <= dx {
            err += dx;
            cur.y += step_y;
        }
    }

    cells
}
