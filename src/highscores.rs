//! Score and high score
//!
//! `current` belongs to the run in progress; `best` is loaded once at startup
//! and written back only when a finished run beats it.

use serde::{Deserialize, Serialize};

use crate::consts::{FOOD_REWARD, HIGHSCORE_KEY};
use crate::persistence::Store;

/// Running score plus the durable best
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    pub best: u32,
}

impl Score {
    /// Fresh score with `best` read from `store`
    ///
    /// Missing, unreadable or out-of-range records yield 0.
    pub fn load(store: &dyn Store) -> Self {
        let best = match store.load_int(HIGHSCORE_KEY) {
            Ok(Some(value)) => match u32::try_from(value) {
                Ok(best) => {
                    log::info!("Loaded high score {}", best);
                    best
                }
                Err(_) => {
                    log::warn!("Ignoring out-of-range high score {}", value);
                    0
                }
            },
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                0
            }
        };

        Self { current: 0, best }
    }

    /// Start a new run
    pub fn reset_current(&mut self) {
        self.current = 0;
    }

    /// Credit one eaten food
    pub fn award_food(&mut self) {
        self.current = self.current.saturating_add(FOOD_REWARD);
    }

    /// Whether the run in progress beats the best
    pub fn is_record(&self) -> bool {
        self.current > self.best
    }

    /// Promote `current` to `best` and persist it, if it is a new record
    ///
    /// Returns true when `best` changed. A failed write is logged and the
    /// in-memory `best` keeps the new value.
    pub fn commit(&mut self, store: &mut dyn Store) -> bool {
        if !self.is_record() {
            return false;
        }

        self.best = self.current;
        match store.save_int(HIGHSCORE_KEY, i64::from(self.best)) {
            Ok(()) => log::info!("New high score {} saved", self.best),
            Err(e) => log::error!("Failed to save high score {}: {}", self.best, e),
        }
        true
    }
}
