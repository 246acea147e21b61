//! Snake with a deterministic simulation core and a ratatui front end.
//!
//! This library provides:
//! - Core game rules with no I/O (game module): snake body, food spawning,
//!   collisions, score/level/speed progression, typed engine events
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - The interactive driver loop (modes module)
//! - High-score persistence across runs (store module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod store;
