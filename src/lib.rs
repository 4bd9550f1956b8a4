//! Retro Snake - a classic grid snake game for the terminal
//!
//! This library provides:
//! - Pure game logic (game module): snake, food, collisions, tick gating
//! - TUI rendering (render module)
//! - Keyboard input mapping (input module)
//! - Terminal-bell sound cues (audio module)
//! - Session stats (metrics module)
//! - The interactive mode tying them together (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
