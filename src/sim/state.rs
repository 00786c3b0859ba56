//! Game state and core simulation types
//!
//! Everything the round owns lives here; the presentation layer only reads it.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Round frozen by the pause toggle
    Paused,
    /// Round ended, waiting for restart
    GameOver,
}

/// Cardinal movement directions, one cell per movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Cell delta for this direction. The grid's y axis points down.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Notifications emitted by the simulation, one per qualifying transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The head hit a wall or the snake's own body; the round is over
    Collision,
    /// The head ate the fruit; the snake grew
    Consume,
}

/// Receiver for simulation events (audio, tests, ...)
pub trait EventSink {
    fn notify(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn notify(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Board geometry: a fixed pixel window subdivided into square cells
///
/// The grid does not divide the window evenly; the remainder is split into a
/// margin on each side so the playable area sits centered. Cell coordinates
/// are zero-based with (0, 0) at the playable area's top-left.
#[derive(Debug, Clone)]
pub struct Board {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Side of one cell in pixels
    pub cell_size: f32,
    /// Playable columns
    pub grid_w: i32,
    /// Playable rows
    pub grid_h: i32,
    /// Total margin (`size mod cell_size`) per axis
    pub offset: Vec2,
}

impl Board {
    pub fn new(width: f32, height: f32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            grid_w: (width / cell_size) as i32,
            grid_h: (height / cell_size) as i32,
            offset: Vec2::new(width % cell_size, height % cell_size),
        }
    }

    /// Whether a cell lies inside the playable rectangle
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.x < self.grid_w && cell.y >= 0 && cell.y < self.grid_h
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, cell: IVec2) -> Vec2 {
        self.offset * 0.5 + cell.as_vec2() * self.cell_size
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE)
    }
}

/// One cell-sized unit of the snake's body, head included
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    /// Occupied cell
    pub cell: IVec2,
    /// Cells per movement step. Only the head's velocity drives movement;
    /// body segments chain-follow the segment ahead instead.
    pub vel: IVec2,
}

/// The player-controlled snake
///
/// `segments[0]` is the head. Body segments trail the head's path exactly:
/// each movement step, segment i moves to the cell segment i-1 occupied on
/// the previous step.
#[derive(Debug, Clone)]
pub struct Snake {
    pub segments: Vec<Segment>,
    /// Previous-tick cell of each segment, snapshotted before movement
    pub history: Vec<IVec2>,
    /// Admits at most one direction change per movement step
    pub allow_turn: bool,
}

impl Snake {
    /// Length-one snake at the playable origin, heading right
    pub fn new() -> Self {
        Self {
            segments: vec![Segment {
                cell: IVec2::ZERO,
                vel: Direction::Right.delta(),
            }],
            history: Vec::with_capacity(MAX_SEGMENTS),
            allow_turn: false,
        }
    }

    pub fn head(&self) -> &Segment {
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any segment occupies the given cell
    pub fn occupies(&self, cell: IVec2) -> bool {
        self.segments.iter().any(|s| s.cell == cell)
    }

    /// Try to change the head's heading
    ///
    /// Honored only when the turn latch is set and the head is not already
    /// moving on the requested axis (which also rules out 180° reversals).
    /// A successful turn clears the latch until the next movement step.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if !self.allow_turn {
            return false;
        }
        let head = &mut self.segments[0];
        let moving_on_axis = if dir.is_horizontal() {
            head.vel.x != 0
        } else {
            head.vel.y != 0
        };
        if moving_on_axis {
            return false;
        }
        head.vel = dir.delta();
        self.allow_turn = false;
        true
    }

    /// Record every segment's current cell into the history buffer
    pub fn snapshot(&mut self) {
        self.history.clear();
        self.history.extend(self.segments.iter().map(|s| s.cell));
    }

    /// One movement step: the head advances by its velocity, the body
    /// chain-follows the snapshot, and the turn latch reopens.
    pub fn advance(&mut self) {
        let head = &mut self.segments[0];
        head.cell += head.vel;
        self.allow_turn = true;
        for i in 1..self.segments.len() {
            self.segments[i].cell = self.history[i - 1];
        }
    }

    /// Append a segment at the tail's pre-move cell. Clamped at capacity;
    /// returns whether a segment was actually added.
    pub fn grow(&mut self) -> bool {
        let len = self.segments.len();
        if len >= MAX_SEGMENTS {
            return false;
        }
        let tail_vel = self.segments[len - 1].vel;
        self.segments.push(Segment {
            cell: self.history[len - 1],
            vel: tail_vel,
        });
        true
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

/// The consumable target
#[derive(Debug, Clone, Copy)]
pub struct Fruit {
    pub cell: IVec2,
    pub active: bool,
}

impl Fruit {
    pub fn inactive() -> Self {
        Self {
            cell: IVec2::ZERO,
            active: false,
        }
    }
}

/// Complete engine state for one run
///
/// Exclusively owned by the frame loop; mutated only through `reset` and
/// `tick`. Same seed plus same inputs reproduces the same run.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub board: Board,
    pub snake: Snake,
    pub fruit: Fruit,
    /// Simulation tick counter; movement applies on multiples of
    /// `MOVE_PERIOD_TICKS`
    pub ticks: u64,
    pub phase: GamePhase,
    /// Fruit placement RNG. Not re-seeded on reset, so consecutive rounds
    /// of one run draw from one stream.
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh state on the default 800x450 board
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            board: Board::default(),
            snake: Snake::new(),
            fruit: Fruit::inactive(),
            ticks: 0,
            phase: GamePhase::Running,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.reset();
        state
    }

    /// Start a new round: tick 0, length-one snake heading right at the
    /// playable origin, fruit inactive, turn latch closed.
    pub fn reset(&mut self) {
        self.snake = Snake::new();
        self.fruit = Fruit::inactive();
        self.ticks = 0;
        self.phase = GamePhase::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_geometry() {
        let board = Board::default();
        assert_eq!(board.grid_w, 25);
        assert_eq!(board.grid_h, 14);
        assert_eq!(board.offset, Vec2::new(25.0, 16.0));

        // Cell origins are the grid margin plus whole cells
        assert_eq!(board.cell_origin(IVec2::ZERO), Vec2::new(12.5, 8.0));
        assert_eq!(
            board.cell_origin(IVec2::new(1, 0)).x - board.cell_origin(IVec2::ZERO).x,
            31.0
        );

        assert!(board.contains(IVec2::new(0, 0)));
        assert!(board.contains(IVec2::new(24, 13)));
        assert!(!board.contains(IVec2::new(25, 0)));
        assert!(!board.contains(IVec2::new(0, 14)));
        assert!(!board.contains(IVec2::new(-1, 0)));
    }

    #[test]
    fn test_steer_respects_latch_and_axis() {
        let mut snake = Snake::new();

        // Latch closed until the first movement step
        assert!(!snake.steer(Direction::Up));

        snake.allow_turn = true;
        // Already moving horizontally: left/right are rejected
        assert!(!snake.steer(Direction::Left));
        assert!(!snake.steer(Direction::Right));

        // Perpendicular turn is accepted and closes the latch
        assert!(snake.steer(Direction::Up));
        assert_eq!(snake.head().vel, IVec2::new(0, -1));
        assert!(!snake.steer(Direction::Down));
    }

    #[test]
    fn test_grow_caps_at_capacity() {
        let mut snake = Snake::new();
        snake.snapshot();
        while snake.len() < MAX_SEGMENTS {
            assert!(snake.grow());
            snake.snapshot();
        }
        assert!(!snake.grow());
        assert_eq!(snake.len(), MAX_SEGMENTS);
    }
}
