//! Collision detection for grid geometry
//!
//! The snake lives on integer cells, so fatal collisions are cell-equality
//! checks; fruit consumption keeps the original's axis-aligned bounding-box
//! overlap test in pixel space.

use glam::{IVec2, Vec2};

use super::state::{Board, Segment};

/// Whether the head has left the playable rectangle
pub fn out_of_bounds(head: IVec2, board: &Board) -> bool {
    !board.contains(head)
}

/// Whether the head occupies the same cell as any body segment
pub fn head_hits_body(segments: &[Segment]) -> bool {
    let head = segments[0].cell;
    segments[1..].iter().any(|s| s.cell == head)
}

/// Axis-aligned overlap between two rectangles given by top-left and size
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Overlap between the head's cell rect and another cell's rect
pub fn cells_overlap(board: &Board, a: IVec2, b: IVec2) -> bool {
    let size = Vec2::splat(board.cell_size);
    aabb_overlap(board.cell_origin(a), size, board.cell_origin(b), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn segment(x: i32, y: i32) -> Segment {
        Segment {
            cell: IVec2::new(x, y),
            vel: Direction::Right.delta(),
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let board = Board::default();
        assert!(!out_of_bounds(IVec2::new(0, 0), &board));
        assert!(!out_of_bounds(IVec2::new(24, 13), &board));
        assert!(out_of_bounds(IVec2::new(-1, 5), &board));
        assert!(out_of_bounds(IVec2::new(25, 5), &board));
        assert!(out_of_bounds(IVec2::new(5, -1), &board));
        assert!(out_of_bounds(IVec2::new(5, 14), &board));
    }

    #[test]
    fn test_head_hits_body() {
        let free = [segment(3, 3), segment(2, 3), segment(1, 3)];
        assert!(!head_hits_body(&free));

        // Head looped back onto the second body segment
        let bitten = [segment(2, 3), segment(3, 3), segment(2, 3)];
        assert!(head_hits_body(&bitten));

        // A lone head cannot bite itself
        assert!(!head_hits_body(&[segment(0, 0)]));
    }

    #[test]
    fn test_aabb_overlap() {
        let size = Vec2::splat(31.0);

        // Same rect
        assert!(aabb_overlap(Vec2::ZERO, size, Vec2::ZERO, size));
        // Edge-touching rects do not overlap
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(31.0, 0.0), size));
        // Partial overlap
        assert!(aabb_overlap(Vec2::ZERO, size, Vec2::new(30.0, 30.0), size));
        // Disjoint
        assert!(!aabb_overlap(Vec2::ZERO, size, Vec2::new(100.0, 0.0), size));
    }

    #[test]
    fn test_cells_overlap_iff_equal() {
        let board = Board::default();
        let a = IVec2::new(4, 7);
        assert!(cells_overlap(&board, a, a));
        // Grid-aligned unit cells only overlap when they are the same cell
        assert!(!cells_overlap(&board, a, IVec2::new(5, 7)));
        assert!(!cells_overlap(&board, a, IVec2::new(4, 8)));
    }
}
