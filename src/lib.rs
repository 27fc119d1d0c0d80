//! Neon Snake - A grid Snake game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, growth, collisions, food)
//! - `game`: Fixed-period game loop driving the simulation
//! - `renderer`: Backend-agnostic draw list plus the canvas 2D backend
//! - `platform`: Browser/native platform abstraction (storage, input)
//! - `settings`: Speed levels and persisted preferences

pub mod game;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::GameLoop;
pub use highscores::BestScore;
pub use settings::{Settings, SpeedLevel};

/// Game configuration constants
pub mod consts {
    /// Size of one grid cell in pixels
    pub const UNIT_SIZE: i32 = 25;

    /// Board dimensions in pixels (20 x 20 cells)
    pub const BOARD_WIDTH: i32 = 500;
    pub const BOARD_HEIGHT: i32 = 500;

    /// Number of segments in a freshly started snake
    pub const INITIAL_SNAKE_LENGTH: usize = 5;

    /// Default tick period in milliseconds
    pub const DEFAULT_TICK_MS: u32 = 90;
    /// Shortest tick period accepted by `set_speed`
    pub const MIN_TICK_MS: u32 = 10;
    /// Maximum ticks run per update to prevent a catch-up burst
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// LocalStorage keys
    pub const BEST_SCORE_KEY: &str = "snakeBestScore";
    pub const SETTINGS_KEY: &str = "snakeSettings";
}
