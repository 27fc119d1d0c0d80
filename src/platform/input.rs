//! Input mapping
//!
//! Turns DOM key names into game commands. The game itself never sees a
//! key code.

use crate::settings::SpeedLevel;
use crate::sim::Direction;

/// A request from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Head in a new direction on the next tick
    Turn(Direction),
    /// Start a new session
    Restart,
    /// Switch to a preset speed
    SetSpeed(SpeedLevel),
    /// Switch to an arbitrary tick period in milliseconds
    SetTickMs(u32),
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "r" | "R" | "Enter" => Command::Restart,
        "1" => Command::SetSpeed(SpeedLevel::Slow),
        "2" => Command::SetSpeed(SpeedLevel::Normal),
        "3" => Command::SetSpeed(SpeedLevel::Fast),
        "4" => Command::SetSpeed(SpeedLevel::Insane),
        _ => return None,
    };
    Some(command)
}

/// Map a level button's `data-speed` attribute to a command
pub fn command_for_speed_attr(value: &str) -> Option<Command> {
    match value.trim().parse::<u32>() {
        Ok(tick_ms) => Some(Command::SetTickMs(tick_ms)),
        Err(_) => {
            log::warn!("Ignoring bad data-speed value {:?}", value);
            None
        }
    }
}
