//! Grid geometry primitives
//!
//! Positions are pixel coordinates that are always a multiple of the cell
//! size. Collision tests are point-in-rectangle containment.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Pixel coordinate on the grid
pub type Point = IVec2;

/// Size of a cell-aligned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub w: i32,
    pub h: i32,
}

impl Dimension {
    /// Square dimension with the given edge
    pub const fn square(size: i32) -> Self {
        Self { w: size, h: size }
    }
}

/// Axis-aligned rectangle with half-open extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The cell occupied by an entity of `dim` at `origin`
    pub fn cell(origin: Point, dim: Dimension) -> Self {
        Self::new(origin.x, origin.y, dim.w, dim.h)
    }

    /// True iff `p.x` is in `[x, x+w)` and `p.y` is in `[y, y+h)`
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Number of whole `cell`-sized columns and rows
    pub fn cells(&self, cell: i32) -> (i32, i32) {
        (self.w / cell, self.h / cell)
    }
}

/// Movement direction (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step vector
    pub fn to_vec(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}
