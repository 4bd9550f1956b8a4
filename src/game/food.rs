use rand::Rng;
use std::collections::VecDeque;

use super::grid::{contains_cell, Cell};

/// Random samples before falling back to a deterministic scan. Generous:
/// under normal play the board is mostly empty and the first few samples hit.
const MAX_RANDOM_ATTEMPTS: usize = 512;

/// A single food item on the grid.
///
/// Invariant: the position is never a member of the snake body; every caller
/// that changes the occupied set re-invokes `relocate_avoiding`.
pub struct Food {
    position: Cell,
}

impl Food {
    /// Create a food item already placed on a free cell
    pub fn new(occupied: &VecDeque<Cell>, cell_count: i32, rng: &mut impl Rng) -> Self {
        let mut food = Self {
            position: Cell::new(0, 0),
        };
        food.relocate_avoiding(occupied, cell_count, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Cell) {
        self.position = position;
    }

    /// Move the food to a uniformly random cell outside the occupied set.
    ///
    /// Precondition: the occupied set is smaller than the grid area, which
    /// always holds in play (game over fires before the body can fill the
    /// board). Past the attempt cap a row-major scan picks the first free
    /// cell; a fully occupied grid leaves the position unchanged.
    pub fn relocate_avoiding(
        &mut self,
        occupied: &VecDeque<Cell>,
        cell_count: i32,
        rng: &mut impl Rng,
    ) {
        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let candidate = Cell::new(rng.gen_range(0..cell_count), rng.gen_range(0..cell_count));
            if !contains_cell(occupied, candidate) {
                self.position = candidate;
                return;
            }
        }

        for y in 0..cell_count {
            for x in 0..cell_count {
                let candidate = Cell::new(x, y);
                if !contains_cell(occupied, candidate) {
                    self.position = candidate;
                    return;
                }
            }
        }
    }
}
