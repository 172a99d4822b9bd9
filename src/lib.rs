//! Grid Snake - a single-player snake game on a toroidal grid
//!
//! This library provides:
//! - Core game logic and the fixed-period tick scheduler (game module)
//! - Keyboard and swipe input translation (input module)
//! - TUI rendering (render module)
//! - The interactive terminal session (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
