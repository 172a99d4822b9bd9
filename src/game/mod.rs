//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies,
//! plus the tick scheduler that drives it at a fixed period.

pub mod action;
pub mod config;
pub mod engine;
pub mod scheduler;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, GameConfig, MAX_GRID_COUNT};
pub use engine::{GameEngine, TickResult};
pub use scheduler::TickScheduler;
pub use state::{Cell, GameOutcome, GameState, SessionState, Snake};
