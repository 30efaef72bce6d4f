//! Snake 2D - classic grid snake
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, food, level, phase machine)
//! - `game`: Fixed-rate loop driver gluing input, simulation and render state
//! - `highscores`: Running score and durable best score
//! - `persistence`: Key-value integer store (file and in-memory)
//! - `settings`: Startup configuration
//! - `platform`: Terminal input and tick clock
//! - `renderer`: Terminal renderer for the per-tick snapshot

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::Score;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default window size in pixels
    pub const SCREEN_WIDTH: i32 = 688;
    pub const SCREEN_HEIGHT: i32 = 496;
    /// Edge length of one grid cell
    pub const CELL_SIZE: i32 = 16;
    /// Margin between the window edge and the playable arena
    pub const BORDER_SIZE: i32 = 32;

    /// Simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 10;

    /// Segments in a freshly spawned snake
    pub const INITIAL_SNAKE_LENGTH: usize = 3;
    /// Points awarded per food eaten
    pub const FOOD_REWARD: u32 = 10;
    /// Random samples tried before falling back to free-cell enumeration
    pub const MAX_FOOD_ATTEMPTS: u32 = 64;

    /// Persistence key for the best score
    pub const HIGHSCORE_KEY: &str = "highscore";
}
