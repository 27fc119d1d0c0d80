//! Single simulation step
//!
//! Moves the snake one cell, resolves food, then checks for collisions.

use super::collision::detect_collision;
use super::state::{GameEvent, GameState, RunState};

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
}

impl TickOutcome {
    pub fn ate_food(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::AteFood { .. }))
    }

    pub fn new_best(&self) -> Option<u64> {
        self.events.iter().find_map(|e| match e {
            GameEvent::NewBest { best } => Some(*best),
            _ => None,
        })
    }

    pub fn game_over(&self) -> bool {
        self.events.iter().any(|e| matches!(e, GameEvent::GameOver { .. }))
    }
}

/// Advance the game state by one tick
///
/// Does nothing once the game is over.
pub fn tick(state: &mut GameState) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if state.run_state == RunState::GameOver {
        return outcome;
    }

    state.ticks += 1;

    let new_head = state.head() + state.velocity;
    state.snake.push_front(new_head);

    if new_head == state.food {
        state.score += 1;
        outcome.events.push(GameEvent::AteFood { score: state.score });

        if state.score > state.best_score {
            state.best_score = state.score;
            outcome.events.push(GameEvent::NewBest {
                best: state.best_score,
            });
        }

        state.respawn_food();
        log::debug!(
            "Ate food, score {} (length {})",
            state.score,
            state.snake.len()
        );
    } else {
        state.snake.pop_back();
    }

    if let Some(cause) = detect_collision(&state.snake, &state.board) {
        state.run_state = RunState::GameOver;
        outcome.events.push(GameEvent::GameOver { cause });
        log::info!(
            "Game over ({:?}) after {} ticks, score {}",
            cause,
            state.ticks,
            state.score
        );
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::UNIT_SIZE;
    use crate::sim::state::{Cell, Collision, Direction};
    use proptest::prelude::*;

    fn cells(state: &GameState) -> Vec<(i32, i32)> {
        state.snake.iter().map(|c| (c.x, c.y)).collect()
    }

    /// Food cell the state's RNG will produce on its next spawn
    fn next_spawn(state: &GameState) -> Cell {
        let mut twin = state.clone();
        twin.respawn_food();
        twin.food
    }

    #[test]
    fn test_tick_moves_without_growing() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(300, 300);

        let outcome = tick(&mut state);
        assert!(outcome.events.is_empty());
        assert_eq!(
            cells(&state),
            vec![(125, 0), (100, 0), (75, 0), (50, 0), (25, 0)]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_tick_eats_food_and_grows() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(125, 0);
        let respawn = next_spawn(&state);

        let outcome = tick(&mut state);
        assert_eq!(state.head(), Cell::new(125, 0));
        assert_eq!(state.snake.len(), 6);
        assert_eq!(state.score, 1);
        assert!(state.is_running());
        assert!(outcome.ate_food());
        assert_eq!(outcome.new_best(), Some(1));
        assert!(!outcome.game_over());
        // Tail stays put on the growth tick
        assert_eq!(state.snake.back(), Some(&Cell::new(0, 0)));
        // A fresh food cell is drawn from the session RNG
        assert_eq!(state.food, respawn);
        assert!(state.board.contains(state.food));
    }

    #[test]
    fn test_each_meal_draws_new_food() {
        let mut state = GameState::new(777, 0);
        for meal in 1..=3 {
            let ahead = state.head() + state.velocity;
            state.food = ahead;
            let respawn = next_spawn(&state);

            let outcome = tick(&mut state);
            assert!(outcome.ate_food());
            assert_eq!(state.score, meal);
            assert_eq!(state.food, respawn);
            if respawn != ahead {
                assert_ne!(state.food, state.head());
            }
        }
        assert_eq!(state.snake.len(), 5 + 3);
    }

    #[test]
    fn test_food_stays_put_without_a_meal() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(300, 300);
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.food, Cell::new(300, 300));
    }

    #[test]
    fn test_no_new_best_below_record() {
        let mut state = GameState::new(12345, 10);
        state.food = Cell::new(125, 0);

        let outcome = tick(&mut state);
        assert!(outcome.ate_food());
        assert_eq!(outcome.new_best(), None);
        assert_eq!(state.best_score, 10);
    }

    #[test]
    fn test_left_wall_ends_game() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(300, 300);
        state.snake = [(0, 50), (0, 25), (0, 0)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .collect();
        state.velocity = Direction::Left.velocity(UNIT_SIZE);

        let outcome = tick(&mut state);
        assert_eq!(state.run_state, RunState::GameOver);
        assert_eq!(
            outcome.events,
            vec![GameEvent::GameOver {
                cause: Collision::Wall
            }]
        );
        assert_eq!(state.head(), Cell::new(-25, 50));

        // Further ticks are inert
        let before = cells(&state);
        let outcome = tick(&mut state);
        assert!(outcome.events.is_empty());
        assert_eq!(cells(&state), before);
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_running_into_third_segment() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(300, 300);
        // Head at (50, 25) moving up lands on the 3rd segment (50, 0)
        state.snake = [(50, 25), (25, 25), (50, 0), (75, 0), (100, 0)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .collect();
        state.velocity = Direction::Up.velocity(UNIT_SIZE);

        let outcome = tick(&mut state);
        assert_eq!(state.run_state, RunState::GameOver);
        assert_eq!(
            outcome.events,
            vec![GameEvent::GameOver {
                cause: Collision::SelfBody
            }]
        );
    }

    #[test]
    fn test_chasing_tail_is_allowed() {
        let mut state = GameState::new(12345, 0);
        state.food = Cell::new(300, 300);
        // A 2x2 loop: the head moves into the cell the tail leaves this tick
        state.snake = [(25, 25), (25, 50), (50, 50), (50, 25)]
            .iter()
            .map(|&(x, y)| Cell::new(x, y))
            .collect();
        state.velocity = Direction::Right.velocity(UNIT_SIZE);

        tick(&mut state);
        assert!(state.is_running());
        assert_eq!(state.head(), Cell::new(50, 25));
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Up),
            Just(Direction::Right),
            Just(Direction::Down),
        ]
    }

    proptest! {
        #[test]
        fn prop_length_and_score_follow_food(
            seed in any::<u64>(),
            turns in prop::collection::vec(proptest::option::of(direction_strategy()), 1..200),
        ) {
            let mut state = GameState::new(seed, 0);
            for turn in turns {
                if !state.is_running() {
                    break;
                }
                if let Some(direction) = turn {
                    state.steer(direction);
                }
                let len = state.snake.len();
                let score = state.score;
                let best = state.best_score;
                let old_head = state.head();
                let food = state.food;
                let respawn = next_spawn(&state);

                let outcome = tick(&mut state);

                // Head moves exactly one unit along one axis
                let delta = state.head() - old_head;
                prop_assert_eq!(delta.x.abs() + delta.y.abs(), UNIT_SIZE);
                prop_assert!(delta.x == 0 || delta.y == 0);

                if state.head() == food {
                    prop_assert_eq!(state.snake.len(), len + 1);
                    prop_assert_eq!(state.score, score + 1);
                    prop_assert!(outcome.ate_food());
                    prop_assert_eq!(state.food, respawn);
                } else {
                    prop_assert_eq!(state.snake.len(), len);
                    prop_assert_eq!(state.score, score);
                    prop_assert!(!outcome.ate_food());
                    prop_assert_eq!(state.food, food);
                }
                prop_assert!(state.best_score >= best);
                prop_assert!(state.best_score >= state.score);
            }
        }

        #[test]
        fn prop_reverse_never_changes_velocity(
            seed in any::<u64>(),
            direction in direction_strategy(),
        ) {
            let mut state = GameState::new(seed, 0);
            state.steer(direction);
            let velocity = state.velocity;
            let current = state.direction().unwrap();
            prop_assert!(!state.steer(current.opposite()));
            prop_assert_eq!(state.velocity, velocity);
        }
    }
}
