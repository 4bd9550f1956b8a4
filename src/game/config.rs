use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the game, fixed at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells per side (the grid is square)
    pub cell_count: i32,
    /// Logical tick interval in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_count: 25,
            tick_interval_ms: 200,
        }
    }
}

impl GameConfig {
    pub fn new(cell_count: i32, tick_interval_ms: u64) -> Self {
        Self {
            cell_count,
            tick_interval_ms,
        }
    }

    /// Smallest grid the fixed initial snake fits on, handy for tests
    pub fn small() -> Self {
        Self::new(12, 200)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
