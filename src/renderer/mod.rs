//! Terminal rendering module
//!
//! `Frame` turns a snapshot into text rows; `TerminalRenderer` puts them on
//! screen with crossterm. Each grid cell is two terminal columns wide.

pub mod frame;
pub mod terminal;

pub use frame::Frame;
pub use terminal::TerminalRenderer;
