//! Collision detection for the snake head
//!
//! Run after the head has been placed for the tick.

use std::collections::VecDeque;

use super::state::{Board, Cell, Collision};

/// Check the head (front of `snake`) against the walls and the rest of the body
pub fn detect_collision(snake: &VecDeque<Cell>, board: &Board) -> Option<Collision> {
    let head = *snake.front()?;

    if !board.contains(head) {
        return Some(Collision::Wall);
    }

    if snake.iter().skip(1).any(|segment| *segment == head) {
        return Some(Collision::SelfBody);
    }

    None
}
