//! Core game logic for Retro Snake
//!
//! Everything in this module is pure state: no I/O, no terminal, no audio.
//! The presentation layers read the accessors on [`Game`] and react to the
//! [`TickOutcome`] each tick produces.

pub mod config;
pub mod engine;
pub mod food;
pub mod grid;
pub mod snake;
pub mod tick;

// Re-export commonly used types
pub use config::GameConfig;
pub use engine::{Game, TickOutcome};
pub use food::Food;
pub use grid::{Cell, Direction};
pub use snake::Snake;
pub use tick::{Clock, MonotonicClock, TickGate};
