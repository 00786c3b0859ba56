//! Shape generation for 2D primitives
//!
//! Everything on the board is axis-aligned: cells become quads, grid lines
//! become thin quads. Coordinates are window pixels, y down.

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Board;

/// Append a filled rectangle (two triangles) given top-left and size
pub fn push_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Append an axis-aligned line of the given thickness
pub fn push_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let (a, b) = (from + perp, from - perp);
    let (c, d) = (to + perp, to - perp);

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Append the board's grid lines, one per cell boundary plus the outer edge
pub fn push_grid(out: &mut Vec<Vertex>, board: &Board, color: [f32; 4]) {
    let half = board.offset * 0.5;

    for i in 0..=board.grid_w {
        let x = half.x + i as f32 * board.cell_size;
        push_line(
            out,
            Vec2::new(x, half.y),
            Vec2::new(x, board.height - half.y),
            1.0,
            color,
        );
    }

    for i in 0..=board.grid_h {
        let y = half.y + i as f32 * board.cell_size;
        push_line(
            out,
            Vec2::new(half.x, y),
            Vec2::new(board.width - half.x, y),
            1.0,
            color,
        );
    }
}
