//! Food placement
//!
//! Food lands on a random grid cell. The body is not checked, so food can
//! appear underneath the snake.

use rand::Rng;

use super::state::{Board, Cell};

/// Pick a grid-aligned coordinate in `[min, max]`
///
/// Scales a random fraction into the range and rounds to the nearest unit,
/// so both ends are reachable (with half the weight of interior cells).
pub fn random_grid_coord<R: Rng>(rng: &mut R, min: i32, max: i32, unit: i32) -> i32 {
    let raw = rng.random::<f64>() * f64::from(max - min) + f64::from(min);
    (raw / f64::from(unit)).round() as i32 * unit
}

/// Choose the next food cell anywhere on the board
pub fn spawn_food<R: Rng>(rng: &mut R, board: &Board) -> Cell {
    let x = random_grid_coord(rng, 0, board.width - board.unit, board.unit);
    let y = random_grid_coord(rng, 0, board.height - board.unit, board.unit);
    log::trace!("Food spawned at ({}, {})", x, y);
    Cell::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_food_is_grid_aligned_and_on_board() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..1000 {
            let food = spawn_food(&mut rng, &board);
            assert_eq!(food.x % board.unit, 0);
            assert_eq!(food.y % board.unit, 0);
            assert!(board.contains(food), "food off board: {:?}", food);
        }
    }

    #[test]
    fn test_food_reaches_both_edges() {
        let board = Board::default();
        let mut rng = Pcg32::seed_from_u64(9);
        let mut min_x = i32::MAX;
        let mut max_x = i32::MIN;
        for _ in 0..5000 {
            let food = spawn_food(&mut rng, &board);
            min_x = min_x.min(food.x);
            max_x = max_x.max(food.x);
        }
        assert_eq!(min_x, 0);
        assert_eq!(max_x, board.width - board.unit);
    }

    #[test]
    fn test_same_seed_same_food() {
        let board = Board::default();
        let mut a = Pcg32::seed_from_u64(5);
        let mut b = Pcg32::seed_from_u64(5);
        for _ in 0..20 {
            assert_eq!(spawn_food(&mut a, &board), spawn_food(&mut b, &board));
        }
    }
}
