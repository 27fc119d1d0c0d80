//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering, storage or platform dependencies

pub mod clock;
pub mod collision;
pub mod food;
pub mod state;
pub mod tick;

pub use clock::FixedTicker;
pub use collision::detect_collision;
pub use food::spawn_food;
pub use state::{Board, Cell, Collision, Direction, GameEvent, GameState, RunState};
pub use tick::{TickOutcome, tick};
