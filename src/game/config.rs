use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::state::Cell;

/// Largest board side accepted; the whole board is redrawn every frame
pub const MAX_GRID_COUNT: usize = 200;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for this schema.
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the game cannot run with.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of cells along each side of the square board
    pub grid_count: usize,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Cell the snake starts on after every reset
    pub start: Cell,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Minimum swipe displacement, in surface units, for a gesture to register
    pub swipe_threshold: f32,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: 20,
            tick_interval_ms: 150,
            start: Cell::new(10, 10),
            food_score: 10,
            swipe_threshold: 50.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size.
    ///
    /// The start cell is moved to the board centre when the default one
    /// would fall outside a smaller board.
    pub fn new(grid_count: usize) -> Self {
        let mut config = Self {
            grid_count,
            ..Default::default()
        };
        if !config.contains(config.start) {
            let centre = (grid_count / 2) as i32;
            config.start = Cell::new(centre, centre);
        }
        config
    }

    /// Same configuration with a fixed RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a playable value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_count < 2 {
            return Err(ConfigError::Invalid {
                field: "grid_count",
                reason: format!("must be at least 2, got {}", self.grid_count),
            });
        }
        if self.grid_count > MAX_GRID_COUNT {
            return Err(ConfigError::Invalid {
                field: "grid_count",
                reason: format!("must be at most {MAX_GRID_COUNT}, got {}", self.grid_count),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if !self.contains(self.start) {
            return Err(ConfigError::Invalid {
                field: "start",
                reason: format!(
                    "({}, {}) is outside a {}x{} board",
                    self.start.x, self.start.y, self.grid_count, self.grid_count
                ),
            });
        }
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::Invalid {
                field: "swipe_threshold",
                reason: format!("must be a positive number, got {}", self.swipe_threshold),
            });
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.grid_count * self.grid_count
    }

    fn contains(&self, cell: Cell) -> bool {
        let n = self.grid_count as i64;
        (0..n).contains(&(cell.x as i64)) && (0..n).contains(&(cell.y as i64))
    }
}
