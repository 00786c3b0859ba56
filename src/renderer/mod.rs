//! WebGPU rendering: CPU-side tessellation into one colored-triangle pass

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

use glam::Vec2;

use crate::Settings;
use crate::sim::{GamePhase, GameState};
use vertex::colors;

/// Tessellate the current frame: grid lines, fruit, then the snake so it
/// draws on top. A finished round draws nothing; the game-over text is a
/// DOM overlay.
pub fn scene_vertices(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut out = Vec::new();
    if state.phase == GamePhase::GameOver {
        return out;
    }

    let board = &state.board;
    let cell = Vec2::splat(board.cell_size);

    if settings.show_grid {
        shapes::push_grid(&mut out, board, colors::GRID_LINE);
    }

    if state.fruit.active {
        shapes::push_rect(&mut out, board.cell_origin(state.fruit.cell), cell, colors::FRUIT);
    }

    for (i, segment) in state.snake.segments.iter().enumerate() {
        let color = if i == 0 {
            colors::SNAKE_HEAD
        } else {
            colors::SNAKE_BODY
        };
        shapes::push_rect(&mut out, board.cell_origin(segment.cell), cell, color);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_empty_after_game_over() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        assert!(scene_vertices(&state, &Settings::default()).is_empty());
    }

    #[test]
    fn test_scene_contains_snake_and_grid() {
        let state = GameState::new(1);

        let mut no_grid = Settings::default();
        no_grid.show_grid = false;
        // Fruit not yet spawned: just the length-1 snake's quad
        assert_eq!(scene_vertices(&state, &no_grid).len(), 6);

        let with_grid = scene_vertices(&state, &Settings::default());
        assert!(with_grid.len() > 6);
    }
}
