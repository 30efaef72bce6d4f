//! The player-controlled snake
//!
//! The body is stored tail-first, head-last. Movement is "follow the leader":
//! each segment takes the previous position of the segment ahead of it and the
//! head advances one cell in the current direction.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::geometry::{Dimension, Direction, Point, Rect};

/// A snake body on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    direction: Direction,
    dimension: Dimension,
    /// Tail at the front, head at the back (never empty)
    positions: VecDeque<Point>,
}

impl Snake {
    /// Create a straight snake of `len` segments starting at `tail` and
    /// extending toward `direction`
    pub fn new(tail: Point, len: usize, direction: Direction, dimension: Dimension) -> Self {
        let step = direction.to_vec() * Point::new(dimension.w, dimension.h);
        let positions = (0..len.max(1) as i32).map(|i| tail + step * i).collect();
        Self {
            direction,
            dimension,
            positions,
        }
    }

    /// Build a snake from explicit tail-first positions (None if empty)
    pub fn from_positions(
        positions: impl IntoIterator<Item = Point>,
        direction: Direction,
        dimension: Dimension,
    ) -> Option<Self> {
        let positions: VecDeque<Point> = positions.into_iter().collect();
        if positions.is_empty() {
            return None;
        }
        Some(Self {
            direction,
            dimension,
            positions,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Body positions, tail first
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.positions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn head(&self) -> Point {
        self.positions[self.positions.len() - 1]
    }

    pub fn tail(&self) -> Point {
        self.positions[0]
    }

    /// Cell rectangle under the head
    pub fn head_rect(&self) -> Rect {
        Rect::cell(self.head(), self.dimension)
    }

    /// Cell at `origin` contains any body segment
    pub fn overlaps_cell(&self, origin: Point) -> bool {
        let cell = Rect::cell(origin, self.dimension);
        self.positions.iter().any(|&seg| cell.contains(seg))
    }

    /// Advance one cell: every segment takes its successor's old position
    pub fn move_forward(&mut self) {
        let step = self.direction.to_vec() * Point::new(self.dimension.w, self.dimension.h);
        let new_head = self.head() + step;
        self.positions.pop_front();
        self.positions.push_back(new_head);
    }

    /// Grow by one segment behind the tail
    ///
    /// The new segment shares the tail cell until the next `move_forward`,
    /// which leaves it behind as the new tail.
    pub fn add_tail(&mut self) {
        let tail = self.tail();
        self.positions.push_front(tail);
    }

    /// Turn, unless `requested` would reverse the snake onto itself
    pub fn change_direction(&mut self, requested: Direction) {
        if requested != self.direction.opposite() {
            self.direction = requested;
        }
    }

    /// Head point lies inside `target`
    pub fn check_collision(&self, target: &Rect) -> bool {
        target.contains(self.head())
    }

    /// Head cell leaves the playable `bounds` on any side
    pub fn check_border_collision(&self, bounds: &Rect) -> bool {
        let head = self.head();
        head.x < bounds.x
            || head.y < bounds.y
            || head.x + self.dimension.w > bounds.right()
            || head.y + self.dimension.h > bounds.bottom()
    }

    /// Head runs into any non-head segment
    pub fn is_trying_to_eat(&self) -> bool {
        let body = self.positions.len() - 1;
        self.positions
            .iter()
            .take(body)
            .any(|&seg| self.check_collision(&Rect::cell(seg, self.dimension)))
    }
}
