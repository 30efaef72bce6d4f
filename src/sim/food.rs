//! Food entity and spawn placement
//!
//! Placement samples random grid-aligned cells and rejects any that overlap
//! the snake. After `MAX_FOOD_ATTEMPTS` rejections it enumerates the free
//! cells instead, so a crowded board still terminates, and a full board
//! reports `None`.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::geometry::{Dimension, Point, Rect};
use super::snake::Snake;
use crate::consts::MAX_FOOD_ATTEMPTS;

/// A food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub dimension: Dimension,
    pub position: Point,
}

impl Food {
    pub fn new(position: Point, dimension: Dimension) -> Self {
        Self {
            dimension,
            position,
        }
    }

    /// Cell rectangle covered by this food
    pub fn rect(&self) -> Rect {
        Rect::cell(self.position, self.dimension)
    }
}

/// Pick a free cell inside `arena` for new food (None when the board is full)
pub fn spawn_food<R: Rng + ?Sized>(arena: &Rect, snake: &Snake, rng: &mut R) -> Option<Point> {
    let cell = snake.dimension();

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let candidate = random_position(arena, cell, rng);
        if !snake.overlaps_cell(candidate) {
            return Some(candidate);
        }
    }

    log::debug!(
        "Food sampling rejected {} times, enumerating free cells",
        MAX_FOOD_ATTEMPTS
    );
    let free = free_cells(arena, snake);
    free.choose(rng).copied()
}

/// Uniform grid-aligned position inside `arena`
pub fn random_position<R: Rng + ?Sized>(arena: &Rect, cell: Dimension, rng: &mut R) -> Point {
    Point::new(
        random_coord(arena.x, arena.right() - cell.w, cell.w, rng),
        random_coord(arena.y, arena.bottom() - cell.h, cell.h, rng),
    )
}

/// `round(uniform(min, max) / cell) * cell`
fn random_coord<R: Rng + ?Sized>(min: i32, max: i32, cell: i32, rng: &mut R) -> i32 {
    let (fmin, fmax) = (min as f64, max as f64);
    let value = rng.random::<f64>() * (fmax - fmin) + fmin;
    (value / cell as f64).round() as i32 * cell
}

/// Every cell origin in `arena` not covered by the snake
fn free_cells(arena: &Rect, snake: &Snake) -> Vec<Point> {
    let cell = snake.dimension();
    let (cols, rows) = (arena.w / cell.w, arena.h / cell.h);
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (col, row)))
        .map(|(col, row)| Point::new(arena.x + col * cell.w, arena.y + row * cell.h))
        .filter(|&p| !snake.overlaps_cell(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Direction;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const CELL: i32 = 16;

    fn dim() -> Dimension {
        Dimension::square(CELL)
    }

    fn assert_valid(arena: &Rect, snake: &Snake, p: Point) {
        assert_eq!(p.x % CELL, 0, "x not aligned: {p}");
        assert_eq!(p.y % CELL, 0, "y not aligned: {p}");
        assert!(arena.contains(p), "{p} outside arena");
        assert!(!snake.overlaps_cell(p), "{p} on the snake");
    }

    #[test]
    fn test_spawn_avoids_snake() {
        let arena = Rect::new(32, 32, 16 * CELL, 16 * CELL);
        let snake = Snake::new(Point::new(128, 160), 3, Direction::Right, dim());
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = spawn_food(&arena, &snake, &mut rng).unwrap();
            assert_valid(&arena, &snake, p);
        }
    }

    #[test]
    fn test_spawn_on_nearly_full_board_finds_last_cell() {
        // 4x1 arena, snake covers the first three cells
        let arena = Rect::new(0, 0, 4 * CELL, CELL);
        let snake = Snake::new(Point::new(0, 0), 3, Direction::Right, dim());
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(
                spawn_food(&arena, &snake, &mut rng),
                Some(Point::new(3 * CELL, 0))
            );
        }
    }

    #[test]
    fn test_spawn_on_full_board_is_none() {
        let arena = Rect::new(0, 0, 3 * CELL, CELL);
        let snake = Snake::new(Point::new(0, 0), 3, Direction::Right, dim());
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(spawn_food(&arena, &snake, &mut rng), None);
    }

    #[test]
    fn test_random_position_covers_edges() {
        let arena = Rect::new(32, 32, 2 * CELL, 2 * CELL);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let p = random_position(&arena, dim(), &mut rng);
            assert!(arena.contains(p));
            seen.insert((p.x, p.y));
        }
        assert_eq!(seen.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_spawn_never_lands_on_snake(
            seed in any::<u64>(),
            cols in 4i32..20,
            rows in 1i32..20,
            len in 1usize..4,
        ) {
            let arena = Rect::new(32, 32, cols * CELL, rows * CELL);
            let snake = Snake::new(Point::new(32, 32), len, Direction::Right, dim());
            let mut rng = Pcg32::seed_from_u64(seed);
            let p = spawn_food(&arena, &snake, &mut rng);
            prop_assert!(p.is_some());
            let p = p.unwrap();
            prop_assert!(arena.contains(p));
            prop_assert_eq!(p.x % CELL, 0);
            prop_assert_eq!(p.y % CELL, 0);
            prop_assert!(!snake.overlaps_cell(p));
        }
    }
}
