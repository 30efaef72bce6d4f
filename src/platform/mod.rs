//! Platform layer
//!
//! Handles the host side of the loop:
//! - Input events (crossterm key presses -> abstract `InputEvent`)
//! - Tick timing (`FixedStep`)

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{InputEvent, Key};
