//! Core game logic for Snake.
//!
//! This module contains all the simulation rules without any I/O or
//! rendering dependencies: the snake body, food spawning, collision
//! detection, and score/level/speed progression. The driver advances it
//! via `GameEngine::update` and reacts to the returned events.

pub mod config;
pub mod direction;
pub mod engine;
pub mod event;
pub mod food;
pub mod position;
pub mod session;
pub mod snake;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::GameEngine;
pub use event::GameEvent;
pub use food::{Food, FoodKind};
pub use position::Position;
pub use session::SessionScore;
pub use snake::Snake;
