//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod geometry;
pub mod level;
pub mod phase;
pub mod snake;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use food::{Food, spawn_food};
pub use geometry::{Dimension, Direction, Point, Rect};
pub use level::{FeedOutcome, Level, LevelError};
pub use phase::{GamePhase, PhaseEvent, TransitionError};
pub use snake::Snake;
pub use snapshot::RenderSnapshot;
pub use state::GameState;
pub use tick::{DeathCause, GameEvent, TickInput, tick};
