//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, cells_overlap, head_hits_body, out_of_bounds};
pub use state::{
    Board, Direction, EventSink, Fruit, GameEvent, GamePhase, GameState, Segment, Snake,
};
pub use tick::{TickInput, tick};
