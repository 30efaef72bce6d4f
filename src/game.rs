//! Game loop driver
//!
//! Owns the simulation context and the score store. Each step folds the
//! input gathered since the last tick into one `TickInput`, advances the
//! simulation and hands back a snapshot for the renderer.

use crate::highscores::Score;
use crate::persistence::Store;
use crate::platform::{InputEvent, Key};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, PhaseEvent, RenderSnapshot, TickInput, tick};

/// A running game
pub struct Game<S: Store> {
    state: GameState,
    store: S,
    running: bool,
}

impl<S: Store> Game<S> {
    /// New game on the menu; the best score is read from `store`
    pub fn new(settings: &Settings, store: S, seed: u64) -> Self {
        let score = Score::load(&store);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(seed, settings.arena(), settings.cell_size, score),
            store,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fold a batch of events into one tick's input
    ///
    /// The last arrow key wins; the first phase request wins. `Quit` stops
    /// the loop after this tick without saving.
    pub fn collect_input(&mut self, events: impl IntoIterator<Item = InputEvent>) -> TickInput {
        let mut input = TickInput::default();
        for event in events {
            match event {
                InputEvent::Quit => self.running = false,
                InputEvent::KeyDown(Key::Arrow(dir)) => input.direction = Some(dir),
                InputEvent::KeyDown(key) => {
                    if input.phase.is_none() {
                        input.phase = self.phase_request(key);
                    }
                }
                InputEvent::Other => {}
            }
        }
        input
    }

    /// Phase event a control key asks for in the current phase
    fn phase_request(&self, key: Key) -> Option<PhaseEvent> {
        let phase = self.state.phase();
        match key {
            Key::Confirm if phase.is_finished() => Some(PhaseEvent::Acknowledge),
            Key::Confirm => Some(PhaseEvent::Start),
            Key::Pause if phase == GamePhase::Paused => Some(PhaseEvent::Resume),
            Key::Pause => Some(PhaseEvent::Pause),
            Key::Arrow(_) => None,
        }
    }

    /// Run one tick with the given input events
    pub fn step(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
    ) -> (RenderSnapshot, Vec<GameEvent>) {
        let input = self.collect_input(events);
        let game_events = tick(&mut self.state, &input, &mut self.store);

        if !self.running {
            self.shutdown();
        }
        (self.state.snapshot(), game_events)
    }

    /// Stop the loop; the record is only written when a run ends
    fn shutdown(&mut self) {
        if matches!(self.state.phase(), GamePhase::Playing | GamePhase::Paused) {
            log::info!("Abandoning run with score {}", self.state.score.current);
        }
        log::info!("Game loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIGHSCORE_KEY;
    use crate::persistence::MemoryStore;
    use crate::sim::{Direction, Point};

    fn game() -> Game<MemoryStore> {
        let settings = Settings {
            width: 16 * 16 + 64,
            height: 16 * 16 + 64,
            ..Default::default()
        };
        Game::new(&settings, MemoryStore::new(), 42)
    }

    fn key(k: Key) -> InputEvent {
        InputEvent::KeyDown(k)
    }

    #[test]
    fn test_last_arrow_wins_first_phase_wins() {
        let mut game = game();
        let input = game.collect_input([
            key(Key::Arrow(Direction::Up)),
            key(Key::Confirm),
            key(Key::Pause),
            key(Key::Arrow(Direction::Left)),
        ]);
        assert_eq!(input.direction, Some(Direction::Left));
        assert_eq!(input.phase, Some(PhaseEvent::Start));
        assert!(game.is_running());
    }

    #[test]
    fn test_enter_starts_and_acknowledges() {
        let mut game = game();
        let (snap, _) = game.step([key(Key::Confirm)]);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert!(snap.snake.len() >= 3);

        // Run into the right wall
        let mut phase = snap.phase;
        for _ in 0..20 {
            phase = game.step([]).0.phase;
            if phase != GamePhase::Playing {
                break;
            }
        }
        assert_eq!(phase, GamePhase::GameOver);

        let (snap, _) = game.step([key(Key::Confirm)]);
        assert_eq!(snap.phase, GamePhase::OnMenu);
        assert!(snap.snake.is_empty());
        assert_eq!(snap.food, None);
    }

    #[test]
    fn test_space_toggles_pause() {
        let mut game = game();
        game.step([key(Key::Confirm)]);
        let (snap, _) = game.step([key(Key::Pause)]);
        assert_eq!(snap.phase, GamePhase::Paused);

        let head = snap.head();
        let (snap, _) = game.step([key(Key::Arrow(Direction::Up))]);
        assert_eq!(snap.head(), head);

        let (snap, _) = game.step([key(Key::Pause)]);
        assert_eq!(snap.phase, GamePhase::Playing);
    }

    #[test]
    fn test_invalid_request_is_not_fatal() {
        let mut game = game();
        let (snap, events) = game.step([key(Key::Pause)]);
        assert_eq!(snap.phase, GamePhase::OnMenu);
        assert!(matches!(events[0], GameEvent::TransitionRejected(_)));
        assert!(game.is_running());
    }

    #[test]
    fn test_quit_mid_run_leaves_store_untouched() {
        let mut game = game();
        game.state.apply(PhaseEvent::Start, &mut game.store).unwrap();

        // Feed the snake once by dropping food in front of it
        let head = game.state().snapshot().head().unwrap();
        game.state.level.as_mut().unwrap().food.position = head + Point::new(16, 0);
        let (snap, _) = game.step([]);
        assert_eq!(snap.score, 10);

        let (snap, _) = game.step([InputEvent::Quit]);
        assert!(!game.is_running());
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(game.store().load_int(HIGHSCORE_KEY).unwrap(), None);
        assert_eq!(game.state().score.best, 0);
    }

    #[test]
    fn test_best_score_loaded_at_start() {
        let settings = Settings::default();
        let game = Game::new(&settings, MemoryStore::with_entry(HIGHSCORE_KEY, 70), 1);
        let snap = game.state().snapshot();
        assert_eq!(snap.best, 70);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.phase, GamePhase::OnMenu);
    }
}
