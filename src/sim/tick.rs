//! Per-frame simulation step
//!
//! One `tick` call is one 60 Hz frame. Positions only change on movement
//! ticks (every `MOVE_PERIOD_TICKS`th tick); the ticks in between exist to
//! collect input and respawn the fruit.

use glam::IVec2;
use rand::Rng;

use super::collision;
use super::state::{Direction, EventSink, Fruit, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Requested heading change
    pub turn: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Restart after game over
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, sink: &mut dyn EventSink) {
    // A finished round waits for an explicit restart and nothing else
    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.reset();
        }
        return;
    }

    // Pause toggle freezes or unfreezes the round without simulating
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Running => GamePhase::Paused,
            _ => GamePhase::Running,
        };
        return;
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    // Player control, gated by the turn latch
    if let Some(dir) = input.turn {
        state.snake.steer(dir);
    }

    // Pre-move positions, needed for chain-follow and growth
    state.snake.snapshot();

    if state.ticks.is_multiple_of(MOVE_PERIOD_TICKS) {
        state.snake.advance();
    }

    // Wall behaviour
    if collision::out_of_bounds(state.snake.head().cell, &state.board) {
        state.phase = GamePhase::GameOver;
        sink.notify(GameEvent::Collision);
        return;
    }

    // Collision with yourself
    if collision::head_hits_body(&state.snake.segments) {
        state.phase = GamePhase::GameOver;
        sink.notify(GameEvent::Collision);
        return;
    }

    if !state.fruit.active {
        spawn_fruit(state);
    }

    if state.fruit.active
        && collision::cells_overlap(&state.board, state.snake.head().cell, state.fruit.cell)
    {
        // Growth is clamped at capacity; the fruit is consumed either way
        state.snake.grow();
        state.fruit.active = false;
        sink.notify(GameEvent::Consume);
    }

    state.ticks += 1;
}

/// Place the fruit on a uniformly random free cell
///
/// Rejection sampling is bounded; once the bound is exhausted the first free
/// cell in row-major order is taken instead. A board with no free cell
/// leaves the fruit inactive (retried next tick).
fn spawn_fruit(state: &mut GameState) {
    let (w, h) = (state.board.grid_w, state.board.grid_h);

    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let cell = IVec2::new(
            state.rng.random_range(0..w),
            state.rng.random_range(0..h),
        );
        if !state.snake.occupies(cell) {
            state.fruit = Fruit { cell, active: true };
            return;
        }
    }

    for y in 0..h {
        for x in 0..w {
            let cell = IVec2::new(x, y);
            if !state.snake.occupies(cell) {
                state.fruit = Fruit { cell, active: true };
                return;
            }
        }
    }

    log::warn!("no free cell to spawn fruit on");
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn input_from(byte: u8) -> TickInput {
        match byte % 16 {
            0 => TickInput {
                turn: Some(Direction::Up),
                ..Default::default()
            },
            1 => TickInput {
                turn: Some(Direction::Down),
                ..Default::default()
            },
            2 => TickInput {
                turn: Some(Direction::Left),
                ..Default::default()
            },
            3 => TickInput {
                turn: Some(Direction::Right),
                ..Default::default()
            },
            4 => TickInput {
                pause: true,
                ..Default::default()
            },
            5 => TickInput {
                restart: true,
                ..Default::default()
            },
            _ => TickInput::default(),
        }
    }

    proptest! {
        #[test]
        fn prop_sim_invariants(
            seed in any::<u64>(),
            script in proptest::collection::vec(any::<u8>(), 0..400),
        ) {
            let mut state = GameState::new(seed);
            let mut events = Vec::new();

            for byte in script {
                let was_over = state.phase == GamePhase::GameOver;
                let was_active = state.fruit.active;
                let prev_vel = state.snake.head().vel;

                tick(&mut state, &input_from(byte), &mut events);

                // Capacity is never exceeded
                prop_assert!(state.snake.len() <= crate::consts::MAX_SEGMENTS);

                // The head only leaves the board by ending the round
                if state.phase != GamePhase::GameOver {
                    prop_assert!(state.board.contains(state.snake.head().cell));
                }

                // Heading changes are perpendicular, never reversals
                // (restart resets the heading, so skip that transition)
                if !was_over {
                    let vel = state.snake.head().vel;
                    prop_assert!(vel == prev_vel || vel.dot(prev_vel) == 0);
                }

                // A freshly spawned fruit is never on the snake
                if !was_active && state.fruit.active {
                    prop_assert!(!state.snake.occupies(state.fruit.cell));
                }
            }
        }
    }
}
