//! Level / arena
//!
//! A level owns the snake and the food for one run and knows the playable
//! bounds they live in.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::food::{Food, spawn_food};
use super::geometry::{Dimension, Direction, Point, Rect};
use super::snake::Snake;
use crate::consts::INITIAL_SNAKE_LENGTH;

/// Errors raised when building a level
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("arena {cols}x{rows} cells cannot hold a snake of {len} plus food")]
    ArenaTooSmall { cols: i32, rows: i32, len: usize },
    #[error("arena {0:?} is not aligned to cell size {1}")]
    Misaligned(Rect, i32),
}

/// Outcome of the snake landing on food
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// New food placed
    Respawned,
    /// No free cell left for food
    BoardFull,
}

/// One run's playfield
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    bounds: Rect,
    cell: Dimension,
    pub snake: Snake,
    pub food: Food,
}

impl Level {
    /// Spawn a level: centered snake heading right, food on a free cell
    pub fn new<R: Rng + ?Sized>(bounds: Rect, cell_size: i32, rng: &mut R) -> Result<Self, LevelError> {
        if cell_size <= 0
            || bounds.x % cell_size != 0
            || bounds.y % cell_size != 0
            || bounds.w % cell_size != 0
            || bounds.h % cell_size != 0
        {
            return Err(LevelError::Misaligned(bounds, cell_size));
        }

        let (cols, rows) = bounds.cells(cell_size);
        let len = INITIAL_SNAKE_LENGTH;
        if cols < len as i32 + 1 || rows < 1 {
            return Err(LevelError::ArenaTooSmall { cols, rows, len });
        }

        let cell = Dimension::square(cell_size);
        let snake = Snake::new(
            Self::spawn_point(&bounds, cell_size, len),
            len,
            Direction::Right,
            cell,
        );
        let position = spawn_food(&bounds, &snake, rng).ok_or(LevelError::ArenaTooSmall {
            cols,
            rows,
            len,
        })?;

        log::info!(
            "Level created: {}x{} cells, snake at {}, food at {}",
            cols,
            rows,
            snake.head(),
            position
        );

        Ok(Self {
            bounds,
            cell,
            snake,
            food: Food::new(position, cell),
        })
    }

    /// Tail position of a fresh snake: center row, tail on the center column,
    /// shifted left only as far as needed for the body to fit
    fn spawn_point(bounds: &Rect, cell_size: i32, len: usize) -> Point {
        let (cols, rows) = bounds.cells(cell_size);
        let col = (cols / 2).min(cols - len as i32);
        Point::new(
            bounds.x + col * cell_size,
            bounds.y + (rows / 2) * cell_size,
        )
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn cell(&self) -> Dimension {
        self.cell
    }

    /// Head is on the food cell
    pub fn snake_on_food(&self) -> bool {
        self.snake.check_collision(&self.food.rect())
    }

    /// Grow the snake and move the food elsewhere
    pub fn feed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FeedOutcome {
        self.snake.add_tail();
        match spawn_food(&self.bounds, &self.snake, rng) {
            Some(position) => {
                self.food.position = position;
                FeedOutcome::Respawned
            }
            None => FeedOutcome::BoardFull,
        }
    }

    /// Head has left the arena
    pub fn snake_out_of_bounds(&self) -> bool {
        self.snake.check_border_collision(&self.bounds)
    }
}
