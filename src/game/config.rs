use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest grid that can hold the 3-segment initial snake.
pub const MIN_GRID: usize = 3;

/// Foods eaten per level-up.
pub const FOOD_PER_LEVEL: u32 = 5;

/// Duration of a FastFood/SlowFood effect, in ticks.
pub const EFFECT_DURATION_TICKS: u32 = 20;

/// Tick-interval reduction per level, in milliseconds.
pub const LEVEL_SPEEDUP_MS: u64 = 20;

/// Fastest base tick interval.
pub const MIN_SPEED_MS: u64 = 50;

/// Tick-interval floor while a FastFood effect is active.
pub const FAST_FLOOR_MS: u64 = 30;

/// FastFood effect subtracts this from the base interval.
pub const FAST_DELTA_MS: u64 = 50;

/// Tick-interval ceiling while a SlowFood effect is active.
pub const SLOW_CEILING_MS: u64 = 300;

/// SlowFood effect adds this to the base interval.
pub const SLOW_DELTA_MS: u64 = 100;

/// Rejected at construction, before any game state exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is too small, need at least 3x3")]
    GridTooSmall { width: usize, height: usize },
}

/// Configuration for a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid.
    pub grid_width: usize,
    /// Height of the game grid.
    pub grid_height: usize,
    /// Label shown for the snake in the UI.
    pub label: String,
    /// Base tick interval at level 1, in milliseconds.
    pub initial_speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 20,
            label: "Snake".to_string(),
            initial_speed_ms: 200,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom grid size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing.
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Reject grids that cannot hold the initial snake.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID || self.grid_height < MIN_GRID {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        Ok(())
    }
}
