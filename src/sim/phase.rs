//! Game phases and the transition table
//!
//! Side effects of transitions (level spawn, high-score commit) live in
//! `GameState::apply`; this module only answers "where does this event lead".

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::level::LevelError;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    OnMenu,
    /// Active run
    Playing,
    /// Run suspended
    Paused,
    /// Run lost
    GameOver,
    /// Run won (no room left for food)
    GameWin,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::OnMenu => "on_menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game_over",
            GamePhase::GameWin => "game_win",
        }
    }

    /// Destination of `event` from this phase, if the transition is allowed
    pub fn next(self, event: PhaseEvent) -> Option<GamePhase> {
        use GamePhase::*;
        use PhaseEvent::*;

        match (event, self) {
            (Start, OnMenu) => Some(Playing),
            (Pause, Playing) => Some(Paused),
            (Resume, Paused) => Some(Playing),
            (Lose, Playing) => Some(GameOver),
            (Win, Playing) => Some(GameWin),
            (Acknowledge, GameOver | GameWin) => Some(OnMenu),
            _ => None,
        }
    }

    /// Run has ended and awaits acknowledgement
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::GameWin)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requests that move the phase machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    Start,
    Pause,
    Resume,
    Lose,
    Win,
    Acknowledge,
}

impl PhaseEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseEvent::Start => "start",
            PhaseEvent::Pause => "pause",
            PhaseEvent::Resume => "resume",
            PhaseEvent::Lose => "lose",
            PhaseEvent::Win => "win",
            PhaseEvent::Acknowledge => "acknowledge",
        }
    }
}

impl fmt::Display for PhaseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected phase transition; the phase is left unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("event {event} inappropriate in phase {from}")]
    Invalid { event: PhaseEvent, from: GamePhase },
    #[error("could not start level: {0}")]
    Level(#[from] LevelError),
}
