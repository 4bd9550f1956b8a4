use std::time::{Duration, Instant};

/// Stats for the whole terminal session, across game-over resets.
///
/// Elapsed time is derived from the start instant when asked, so there is
/// nothing to refresh per frame.
pub struct SessionStats {
    started: Instant,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
