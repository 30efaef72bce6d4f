//! Fixed timestep simulation tick
//!
//! One call advances the game by one step: the phase request is applied
//! first, then, while playing, the snake turns, moves and is checked against
//! food, itself and the arena border, in that order.

use super::geometry::Direction;
use super::level::FeedOutcome;
use super::phase::{GamePhase, PhaseEvent, TransitionError};
use super::state::GameState;
use crate::persistence::Store;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Requested heading
    pub direction: Option<Direction>,
    /// Requested phase change
    pub phase: Option<PhaseEvent>,
}

/// Why a run ended in `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Head ran into the body
    SelfCollision,
    /// Head left the arena
    Border,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    TransitionRejected(TransitionError),
    FoodEaten { score: u32, length: usize },
    Died(DeathCause),
    BoardFull,
}

/// What the playing step decided
enum StepOutcome {
    Alive,
    Won,
    Dead(DeathCause),
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, store: &mut dyn Store) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(event) = input.phase {
        transition(state, event, store, &mut events);
    }

    if state.phase() != GamePhase::Playing {
        return events;
    }

    match step_playing(state, input, &mut events) {
        StepOutcome::Alive => {}
        StepOutcome::Won => {
            events.push(GameEvent::BoardFull);
            transition(state, PhaseEvent::Win, store, &mut events);
        }
        StepOutcome::Dead(cause) => {
            log::info!("Snake died: {:?} at tick {}", cause, state.time_ticks);
            events.push(GameEvent::Died(cause));
            transition(state, PhaseEvent::Lose, store, &mut events);
        }
    }

    events
}

fn transition(
    state: &mut GameState,
    event: PhaseEvent,
    store: &mut dyn Store,
    events: &mut Vec<GameEvent>,
) {
    let from = state.phase();
    match state.apply(event, store) {
        Ok(to) => events.push(GameEvent::PhaseChanged { from, to }),
        Err(e) => {
            log::warn!("Failed to change phase: {}", e);
            events.push(GameEvent::TransitionRejected(e));
        }
    }
}

fn step_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) -> StepOutcome {
    state.time_ticks += 1;

    let Some(level) = state.level.as_mut() else {
        log::error!("Playing without a level");
        return StepOutcome::Alive;
    };

    if let Some(direction) = input.direction {
        level.snake.change_direction(direction);
    }
    level.snake.move_forward();

    if level.snake_on_food() {
        state.score.award_food();
        let outcome = level.feed(&mut state.rng);
        events.push(GameEvent::FoodEaten {
            score: state.score.current,
            length: level.snake.len(),
        });
        if outcome == FeedOutcome::BoardFull {
            log::info!("No free cell left for food");
            return StepOutcome::Won;
        }
    }

    if level.snake.is_trying_to_eat() {
        return StepOutcome::Dead(DeathCause::SelfCollision);
    }
    if level.snake_out_of_bounds() {
        return StepOutcome::Dead(DeathCause::Border);
    }

    StepOutcome::Alive
}
