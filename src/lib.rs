//! Grid Snake - a classic fixed-grid snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Procedural sound effects (wasm only)
//! - `settings`: User preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (the original targets 60 FPS)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;
    /// Side of one grid cell in pixels
    pub const CELL_SIZE: f32 = 31.0;

    /// Hard cap on snake length, head included
    pub const MAX_SEGMENTS: usize = 256;
    /// The snake moves one cell every this many simulation ticks
    pub const MOVE_PERIOD_TICKS: u64 = 5;

    /// Random fruit placements tried before falling back to a scan
    pub const MAX_SPAWN_ATTEMPTS: u32 = 128;
}
