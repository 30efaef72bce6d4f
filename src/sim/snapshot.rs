//! Render-state snapshot
//!
//! Everything a renderer needs for one frame, copied out after the tick so
//! the renderer never touches live simulation state.

use serde::{Deserialize, Serialize};

use super::geometry::{Dimension, Point, Rect};
use super::phase::GamePhase;
use super::state::GameState;

/// Post-tick view of the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    /// Playable bounds
    pub arena: Rect,
    /// Cell size of snake segments and food
    pub cell: Dimension,
    /// Body positions, tail first (empty on the menu)
    pub snake: Vec<Point>,
    pub food: Option<Point>,
    pub score: u32,
    pub best: u32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let level = state.level.as_ref();
        Self {
            phase: state.phase(),
            arena: state.arena(),
            cell: level
                .map(|l| l.cell())
                .unwrap_or(Dimension::square(state.cell_size())),
            snake: level
                .map(|l| l.snake.positions().collect())
                .unwrap_or_default(),
            food: level.map(|l| l.food.position),
            score: state.score.current,
            best: state.score.best,
        }
    }

    /// Snake head, if a level is active
    pub fn head(&self) -> Option<Point> {
        self.snake.last().copied()
    }
}
