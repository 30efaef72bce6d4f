//! Game settings
//!
//! Loaded from an optional JSON file, then overridden from the command line.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Rect;

/// Errors raised while loading or checking settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Startup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window (terminal) title
    pub title: String,
    /// Window size in pixels
    pub width: i32,
    pub height: i32,
    /// Use the whole screen instead of `width` x `height`
    pub fullscreen: bool,

    // === Grid ===
    /// Edge of one cell in pixels
    pub cell_size: i32,
    /// Margin between window edge and arena
    pub border_size: i32,

    /// Simulation ticks per second
    pub tick_hz: u32,

    /// Where the high score is kept
    pub score_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Snake 2D".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fullscreen: false,

            cell_size: CELL_SIZE,
            border_size: BORDER_SIZE,

            tick_hz: TICK_HZ,

            score_file: default_score_file(),
        }
    }
}

/// `$HOME/.snake2d.json`, or the working directory when HOME is unset
fn default_score_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".snake2d.json")
}

impl Settings {
    /// Load settings from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Check that the grid fits together
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        if self.cell_size <= 0 {
            return invalid(format!("cell size {} must be positive", self.cell_size));
        }
        if self.border_size < 0 || self.border_size % self.cell_size != 0 {
            return invalid(format!(
                "border {} must be a non-negative multiple of cell size {}",
                self.border_size, self.cell_size
            ));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return invalid(format!(
                "window {}x{} must be a multiple of cell size {}",
                self.width, self.height, self.cell_size
            ));
        }
        if !(1..=120).contains(&self.tick_hz) {
            return invalid(format!("tick rate {} Hz outside 1..=120", self.tick_hz));
        }

        let (cols, rows) = self.arena().cells(self.cell_size);
        if cols < INITIAL_SNAKE_LENGTH as i32 + 1 || rows < 1 {
            return invalid(format!("arena of {cols}x{rows} cells is too small"));
        }
        Ok(())
    }

    /// Playable bounds: the window inset by the border on every side
    pub fn arena(&self) -> Rect {
        Rect::new(
            self.border_size,
            self.border_size,
            self.width - 2 * self.border_size,
            self.height - 2 * self.border_size,
        )
    }

    /// Interval between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }

    /// Resize the window to `cols` x `rows` cells (used for fullscreen)
    pub fn fit_cells(&mut self, cols: i32, rows: i32) {
        self.width = cols * self.cell_size;
        self.height = rows * self.cell_size;
    }
}
