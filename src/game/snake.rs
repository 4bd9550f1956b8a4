use std::collections::VecDeque;

use super::grid::{contains_cell, Cell, Direction};

/// Fixed starting body, head first
pub const INITIAL_BODY: [Cell; 3] = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];
pub const INITIAL_DIRECTION: Direction = Direction::Down;

/// The snake: an ordered deque of cells with the head at the front
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_growth: bool,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            body: INITIAL_BODY.into_iter().collect(),
            direction: INITIAL_DIRECTION,
            pending_growth: false,
        }
    }

    pub fn head(&self) -> Cell {
        // Invariant: the body is never empty (length >= 1 at all times)
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advance one cell in the current direction.
    ///
    /// Growth is always expressed as skipping one tail removal, never as a
    /// tail insertion, so the flag extends the body by exactly one cell on
    /// the step after food was eaten.
    pub fn step(&mut self) {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Accept a new direction unless it reverses the current one.
    ///
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Arm the one-shot growth flag for the next step. Idempotent.
    pub fn request_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Is the head on top of any other body cell?
    pub fn self_collided(&self) -> bool {
        contains_cell(self.body.iter().skip(1), self.head())
    }

    /// Restore the fixed initial body and direction
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend(INITIAL_BODY);
        self.direction = INITIAL_DIRECTION;
        self.pending_growth = false;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_vec(snake: &Snake) -> Vec<Cell> {
        snake.body().iter().copied().collect()
    }

    #[test]
    fn test_initial_configuration() {
        let snake = Snake::new();
        assert_eq!(body_vec(&snake), INITIAL_BODY.to_vec());
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn test_step_moves_without_growing() {
        let mut snake = Snake::new();
        snake.step();

        assert_eq!(
            body_vec(&snake),
            vec![Cell::new(6, 10), Cell::new(6, 9), Cell::new(5, 9)]
        );
    }

    #[test]
    fn test_step_with_pending_growth_keeps_tail() {
        let mut snake = Snake::new();
        snake.request_growth();
        snake.step();

        assert_eq!(
            body_vec(&snake),
            vec![
                Cell::new(6, 10),
                Cell::new(6, 9),
                Cell::new(5, 9),
                Cell::new(4, 9)
            ]
        );

        // The flag is one-shot: the next step drops the tail normally
        snake.step();
        assert_eq!(
            body_vec(&snake),
            vec![
                Cell::new(6, 11),
                Cell::new(6, 10),
                Cell::new(6, 9),
                Cell::new(5, 9)
            ]
        );
    }

    #[test]
    fn test_request_growth_is_idempotent() {
        let mut snake = Snake::new();
        snake.request_growth();
        snake.request_growth();
        snake.step();
        assert_eq!(snake.body().len(), 4);

        snake.step();
        assert_eq!(snake.body().len(), 4);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new();
        assert!(!snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Down);

        assert!(snake.set_direction(Direction::Right));
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_self_collision_detection() {
        // Length 5 is the minimum that lets a tight loop bite the body
        let mut snake = Snake::new();
        snake.request_growth();
        snake.step();
        snake.request_growth();
        snake.step();
        assert_eq!(snake.body().len(), 5);

        // Loop back onto a cell still occupied after the tail drop
        assert!(snake.set_direction(Direction::Left));
        snake.step();
        assert!(snake.set_direction(Direction::Up));
        snake.step();
        assert!(!snake.self_collided());
        assert!(snake.set_direction(Direction::Right));
        snake.step();

        assert!(snake.self_collided());
    }

    #[test]
    fn test_no_false_positive_on_vacated_tail() {
        // At length 4 the same tight loop lands the head on the cell the
        // tail vacates during that very step, which must not count as a
        // collision.
        let mut snake = Snake::new();
        snake.request_growth();
        snake.step();
        assert_eq!(snake.body().len(), 4);

        assert!(snake.set_direction(Direction::Left));
        snake.step();
        assert!(!snake.self_collided());

        // Up from (5,10) lands on (5,9), dropped from the tail this step
        assert!(snake.set_direction(Direction::Up));
        snake.step();
        assert_eq!(snake.head(), Cell::new(5, 9));
        assert!(!snake.self_collided());

        assert!(snake.set_direction(Direction::Right));
        snake.step();
        assert_eq!(snake.head(), Cell::new(6, 9));
        assert!(!snake.self_collided());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut snake = Snake::new();
        snake.request_growth();
        snake.step();
        snake.set_direction(Direction::Left);
        snake.request_growth();

        snake.reset();
        assert_eq!(body_vec(&snake), INITIAL_BODY.to_vec());
        assert_eq!(snake.direction(), Direction::Down);

        // pending_growth was cleared too
        snake.step();
        assert_eq!(snake.body().len(), 3);
    }
}
