//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::spawn_food;
use crate::consts::*;

/// A grid-aligned position in pixels (multiples of the board unit)
pub type Cell = IVec2;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Snake is moving, ticks are scheduled
    Running,
    /// Snake collided; nothing moves until reset
    GameOver,
}

/// Semantic movement direction, independent of any key encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Unit step on the grid (screen coordinates, y grows downward)
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::new(-1, 0),
            Direction::Up => IVec2::new(0, -1),
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
        }
    }

    /// Velocity for this direction on a board with the given unit
    pub fn velocity(self, unit: i32) -> IVec2 {
        self.step() * unit
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// Board geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub unit: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            unit: UNIT_SIZE,
        }
    }
}

impl Board {
    /// Board covering a canvas of the given pixel size.
    ///
    /// Partial cells at the right and bottom edges are dropped. The board is
    /// never narrower than the starting snake or shorter than one row.
    pub fn fit(width: u32, height: u32, unit: i32) -> Self {
        let unit = unit.max(1);
        let cells = |px: u32, min: i32| (i32::try_from(px).unwrap_or(i32::MAX) / unit).max(min);
        Self {
            width: cells(width, INITIAL_SNAKE_LENGTH as i32) * unit,
            height: cells(height, 1) * unit,
            unit,
        }
    }

    /// Number of cells along x
    pub fn columns(&self) -> i32 {
        self.width / self.unit
    }

    /// Number of cells along y
    pub fn rows(&self) -> i32 {
        self.height / self.unit
    }

    /// Whether a cell lies inside the playfield
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Head landed on the food; carries the new score
    AteFood { score: u64 },
    /// Score passed the previous best
    NewBest { best: u64 },
    /// Session ended
    GameOver { cause: Collision },
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfBody,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    /// Body cells, head first
    pub snake: VecDeque<Cell>,
    /// Pixels moved per tick
    pub velocity: IVec2,
    pub food: Cell,
    pub score: u64,
    /// Best score seen so far, carried across resets
    pub best_score: u64,
    pub run_state: RunState,
    /// Ticks since the session started
    pub ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh session on the default board
    pub fn new(seed: u64, best_score: u64) -> Self {
        Self::with_board(Board::default(), seed, best_score)
    }

    /// Create a fresh session on a custom board
    pub fn with_board(board: Board, seed: u64, best_score: u64) -> Self {
        let mut state = Self {
            board,
            snake: VecDeque::with_capacity(INITIAL_SNAKE_LENGTH),
            velocity: Direction::Right.velocity(board.unit),
            food: Cell::ZERO,
            score: 0,
            best_score,
            run_state: RunState::Running,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.restart();
        state
    }

    /// Put the snake back at the top-left heading right and clear the score.
    ///
    /// The RNG keeps its stream so consecutive sessions see new food.
    pub fn restart(&mut self) {
        let unit = self.board.unit;
        self.snake.clear();
        self.snake.extend(
            (0..INITIAL_SNAKE_LENGTH as i32)
                .rev()
                .map(|i| Cell::new(i * unit, 0)),
        );
        self.velocity = Direction::Right.velocity(unit);
        self.score = 0;
        self.ticks = 0;
        self.run_state = RunState::Running;
        self.respawn_food();
    }

    /// Move the food to a fresh random cell
    pub fn respawn_food(&mut self) {
        self.food = spawn_food(&mut self.rng, &self.board);
    }

    pub fn head(&self) -> Cell {
        self.snake.front().copied().unwrap_or(Cell::ZERO)
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Direction matching the current velocity, if it is a unit step
    pub fn direction(&self) -> Option<Direction> {
        [Direction::Left, Direction::Up, Direction::Right, Direction::Down]
            .into_iter()
            .find(|d| d.velocity(self.board.unit) == self.velocity)
    }

    /// Change heading for the next tick.
    ///
    /// Returns false (and leaves the velocity alone) when the turn would
    /// reverse the snake onto itself.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let velocity = direction.velocity(self.board.unit);
        if velocity == -self.velocity {
            return false;
        }
        // Two quick turns between ticks must not fold the head into the neck
        if self.snake.get(1) == Some(&(self.head() + velocity)) {
            return false;
        }
        self.velocity = velocity;
        true
    }
}
