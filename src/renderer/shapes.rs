//! Draw command generation for board elements

use super::commands::{DrawCmd, Frame, Rect, TextStyle, colors};
use crate::sim::{Board, Cell, GameState};

fn cell_rect(cell: Cell, unit: i32) -> Rect {
    let unit = f64::from(unit);
    Rect::new(f64::from(cell.x), f64::from(cell.y), unit, unit)
}

/// Checkerboard background, one rect per grid cell
pub fn board_tiles(board: &Board) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity((board.columns() * board.rows()) as usize);

    for i in 0..board.columns() {
        for j in 0..board.rows() {
            let color = if (i + j) % 2 == 0 {
                colors::TILE_DARK
            } else {
                colors::TILE_LIGHT
            };
            cmds.push(DrawCmd::FillRect {
                rect: cell_rect(Cell::new(i, j) * board.unit, board.unit),
                color,
            });
        }
    }

    cmds
}

pub fn food(cell: Cell, unit: i32) -> DrawCmd {
    DrawCmd::FillRect {
        rect: cell_rect(cell, unit),
        color: colors::FOOD,
    }
}

/// Filled and outlined square per segment
pub fn snake_segments<'a>(
    snake: impl IntoIterator<Item = &'a Cell>,
    unit: i32,
) -> Vec<DrawCmd> {
    snake
        .into_iter()
        .flat_map(|cell| {
            let rect = cell_rect(*cell, unit);
            [
                DrawCmd::FillRect {
                    rect,
                    color: colors::SNAKE,
                },
                DrawCmd::StrokeRect {
                    rect,
                    color: colors::SNAKE_BORDER,
                },
            ]
        })
        .collect()
}

/// Dimmed panel with the game over caption and restart hint
pub fn game_over_overlay(board: &Board) -> Vec<DrawCmd> {
    let w = f64::from(board.width);
    let h = f64::from(board.height);

    vec![
        DrawCmd::FillRect {
            rect: Rect::new(0.0, 0.0, w, h),
            color: colors::OVERLAY,
        },
        DrawCmd::Text {
            text: "GAME OVER",
            x: w / 2.0,
            y: h / 2.0 - 20.0,
            style: TextStyle {
                font: "bold 50px Orbitron, Arial",
                color: colors::GAME_OVER_TEXT,
                glow: Some((colors::GAME_OVER_TEXT, 20.0)),
            },
        },
        DrawCmd::Text {
            text: "Press Reset to play again",
            x: w / 2.0,
            y: h / 2.0 + 30.0,
            style: TextStyle {
                font: "20px Orbitron, Arial",
                color: colors::HINT_TEXT,
                glow: Some((colors::HINT_TEXT, 10.0)),
            },
        },
    ]
}

/// Full redraw: background, food, snake, then the overlay when the game is over
pub fn build_frame(state: &GameState) -> Frame {
    let board = &state.board;
    let mut frame = Frame::new();

    frame.extend(board_tiles(board));
    frame.push(food(state.food, board.unit));
    frame.extend(snake_segments(&state.snake, board.unit));

    if !state.is_running() {
        frame.extend(game_over_overlay(board));
    }

    frame
}
