use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::GameConfig;
use super::food::Food;
use super::grid::{Cell, Direction};
use super::snake::Snake;

/// What happened during one logical tick.
///
/// This is the signal channel to the presentation layer: `ate_food` drives
/// the eat cue, `final_score` is `Some` exactly when a collision ended the
/// run (carrying the score before it was reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub final_score: Option<u32>,
}

/// The game state machine: owns the snake, the food, the score and the
/// running flag. All game rules live here; rendering and audio only read
/// the accessors and the per-tick outcome.
pub struct Game {
    config: GameConfig,
    snake: Snake,
    food: Food,
    score: u32,
    running: bool,
    rng: StdRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Like `new`, but with a caller-supplied RNG so tests can seed the
    /// food placement deterministically
    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new();
        let food = Food::new(snake.body(), config.cell_count, &mut rng);
        Self {
            config,
            snake,
            food,
            score: 0,
            running: true,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one logical tick: step, then food / edge / self checks in
    /// that order. A no-op while stopped.
    pub fn update(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::default();
        }

        self.snake.step();
        let ate_food = self.check_food();

        // Both collision predicates are evaluated against the pre-reset
        // body. Body cells are always in bounds, so at most one of them can
        // hold and game over fires at most once per tick.
        let final_score = if self.head_out_of_bounds() || self.snake.self_collided() {
            let score = self.score;
            self.game_over();
            Some(score)
        } else {
            None
        };

        TickOutcome {
            ate_food,
            final_score,
        }
    }

    /// Offer a direction change. An accepted change also resumes a stopped
    /// game; a rejected reversal does neither.
    pub fn steer(&mut self, direction: Direction) {
        if self.snake.set_direction(direction) {
            self.running = true;
        }
    }

    fn check_food(&mut self) -> bool {
        if self.snake.head() != self.food.position() {
            return false;
        }

        self.food
            .relocate_avoiding(self.snake.body(), self.config.cell_count, &mut self.rng);
        self.snake.request_growth();
        self.score += 1;
        true
    }

    fn head_out_of_bounds(&self) -> bool {
        let Cell { x, y } = self.snake.head();
        let n = self.config.cell_count;
        x == -1 || x == n || y == -1 || y == n
    }

    fn game_over(&mut self) {
        self.snake.reset();
        self.food
            .relocate_avoiding(self.snake.body(), self.config.cell_count, &mut self.rng);
        self.score = 0;
        self.running = false;
    }

    #[cfg(test)]
    fn place_food(&mut self, position: Cell) {
        self.food.place_at(position);
    }
}
