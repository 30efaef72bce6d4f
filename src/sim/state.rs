//! Game state and phase transitions
//!
//! `GameState` is the single simulation context: the driver owns it and passes
//! it to `tick`. Transition side effects run here:
//! - entering `Playing` from `OnMenu` spawns a fresh level and zeroes the score
//! - leaving `Playing` for `GameOver`/`GameWin` commits the high score

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::geometry::Rect;
use super::level::Level;
use super::phase::{GamePhase, PhaseEvent, TransitionError};
use super::snapshot::RenderSnapshot;
use crate::highscores::Score;
use crate::persistence::Store;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(super) rng: Pcg32,
    /// Current phase
    phase: GamePhase,
    /// Active level (present from the first start until back on the menu)
    pub level: Option<Level>,
    /// Score and best score
    pub score: Score,
    /// Playable bounds for new levels
    arena: Rect,
    cell_size: i32,
    /// Ticks spent in `Playing`
    pub time_ticks: u64,
}

impl GameState {
    /// Create a state on the menu with the given seed
    pub fn new(seed: u64, arena: Rect, cell_size: i32, score: Score) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::OnMenu,
            level: None,
            score,
            arena,
            cell_size,
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn arena(&self) -> Rect {
        self.arena
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Apply a phase event, running entry/exit effects
    ///
    /// On error the phase and all other state are left untouched.
    pub fn apply(
        &mut self,
        event: PhaseEvent,
        store: &mut dyn Store,
    ) -> Result<GamePhase, TransitionError> {
        let from = self.phase;
        let to = from
            .next(event)
            .ok_or(TransitionError::Invalid { event, from })?;

        // Build the level before any effect runs so a failure changes nothing
        let fresh_level = if from == GamePhase::OnMenu && to == GamePhase::Playing {
            Some(Level::new(self.arena, self.cell_size, &mut self.rng)?)
        } else {
            None
        };

        self.on_exit(from, to, store);
        self.phase = to;
        self.on_enter(from, to, fresh_level);

        log::info!("Phase {} -> {} ({})", from, to, event);
        Ok(to)
    }

    /// Like `apply`, but a rejected transition is only logged
    pub fn request(&mut self, event: PhaseEvent, store: &mut dyn Store) -> bool {
        match self.apply(event, store) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Failed to change phase: {}", e);
                false
            }
        }
    }

    fn on_exit(&mut self, from: GamePhase, to: GamePhase, store: &mut dyn Store) {
        if from == GamePhase::Playing && to.is_finished() {
            self.score.commit(store);
        }
    }

    fn on_enter(&mut self, from: GamePhase, to: GamePhase, fresh_level: Option<Level>) {
        match to {
            GamePhase::Playing if from == GamePhase::OnMenu => {
                self.level = fresh_level;
                self.score.reset_current();
                self.time_ticks = 0;
            }
            GamePhase::OnMenu => {
                self.level = None;
            }
            _ => {}
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIGHSCORE_KEY;
    use crate::persistence::MemoryStore;

    const CELL: i32 = 16;

    fn arena() -> Rect {
        Rect::new(32, 32, 16 * CELL, 16 * CELL)
    }

    fn new_state() -> GameState {
        GameState::new(12345, arena(), CELL, Score::default())
    }

    #[test]
    fn test_starts_on_menu_without_level() {
        let state = new_state();
        assert_eq!(state.phase(), GamePhase::OnMenu);
        assert!(state.level.is_none());
    }

    #[test]
    fn test_pause_from_menu_fails() {
        let mut state = new_state();
        let mut store = MemoryStore::new();
        let err = state.apply(PhaseEvent::Pause, &mut store).unwrap_err();
        assert_eq!(
            err,
            TransitionError::Invalid {
                event: PhaseEvent::Pause,
                from: GamePhase::OnMenu
            }
        );
        assert_eq!(state.phase(), GamePhase::OnMenu);
        assert!(!state.request(PhaseEvent::Pause, &mut store));
    }

    #[test]
    fn test_start_from_playing_fails() {
        let mut state = new_state();
        let mut store = MemoryStore::new();
        state.apply(PhaseEvent::Start, &mut store).unwrap();
        let before = state.level.clone().unwrap().snake;
        assert!(state.apply(PhaseEvent::Start, &mut store).is_err());
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.level.unwrap().snake, before);
    }

    #[test]
    fn test_full_cycle_spawns_fresh_level() {
        let mut state = new_state();
        let mut store = MemoryStore::new();

        state.apply(PhaseEvent::Start, &mut store).unwrap();
        assert_eq!(state.phase(), GamePhase::Playing);
        let level = state.level.as_mut().unwrap();
        assert_eq!(level.snake.len(), 3);
        level.snake.move_forward();
        level.snake.add_tail();
        state.score.award_food();

        state.apply(PhaseEvent::Lose, &mut store).unwrap();
        assert_eq!(state.phase(), GamePhase::GameOver);
        state.apply(PhaseEvent::Acknowledge, &mut store).unwrap();
        assert_eq!(state.phase(), GamePhase::OnMenu);
        assert!(state.level.is_none());

        state.apply(PhaseEvent::Start, &mut store).unwrap();
        let level = state.level.as_ref().unwrap();
        assert_eq!(level.snake.len(), 3);
        assert_eq!(
            level.snake.tail(),
            crate::sim::Point::new(32 + 8 * CELL, 32 + 8 * CELL)
        );
        assert_eq!(state.score.current, 0);
        assert_eq!(state.score.best, 10);
    }

    #[test]
    fn test_lose_commits_record() {
        let mut state = new_state();
        let mut store = MemoryStore::with_entry(HIGHSCORE_KEY, 20);
        state.score = Score::load(&store);

        state.apply(PhaseEvent::Start, &mut store).unwrap();
        for _ in 0..3 {
            state.score.award_food();
        }
        state.apply(PhaseEvent::Lose, &mut store).unwrap();
        assert_eq!(state.score.best, 30);
        assert_eq!(store.load_int(HIGHSCORE_KEY).unwrap(), Some(30));
    }

    #[test]
    fn test_win_below_record_keeps_store() {
        let mut state = new_state();
        let mut store = MemoryStore::with_entry(HIGHSCORE_KEY, 100);
        state.score = Score::load(&store);

        state.apply(PhaseEvent::Start, &mut store).unwrap();
        state.score.award_food();
        state.apply(PhaseEvent::Win, &mut store).unwrap();
        assert_eq!(state.phase(), GamePhase::GameWin);
        assert_eq!(state.score.best, 100);
        assert_eq!(store.load_int(HIGHSCORE_KEY).unwrap(), Some(100));
    }

    #[test]
    fn test_pause_resume_keeps_level() {
        let mut state = new_state();
        let mut store = MemoryStore::new();
        state.apply(PhaseEvent::Start, &mut store).unwrap();
        state.score.award_food();
        let snake = state.level.clone().unwrap().snake;

        state.apply(PhaseEvent::Pause, &mut store).unwrap();
        assert!(state.apply(PhaseEvent::Lose, &mut store).is_err());
        state.apply(PhaseEvent::Resume, &mut store).unwrap();

        assert_eq!(state.level.unwrap().snake, snake);
        assert_eq!(state.score.current, 10);
    }

    #[test]
    fn test_start_in_tiny_arena_fails_cleanly() {
        let mut state = GameState::new(1, Rect::new(0, 0, 2 * CELL, 2 * CELL), CELL, Score::default());
        let mut store = MemoryStore::new();
        let err = state.apply(PhaseEvent::Start, &mut store).unwrap_err();
        assert!(matches!(err, TransitionError::Level(_)));
        assert_eq!(state.phase(), GamePhase::OnMenu);
        assert!(state.level.is_none());
    }
}
