use ratatui::layout::Rect;

/// Terminal columns per logical grid cell. Two columns per row keeps the
/// board roughly square in most fonts.
pub const CELL_WIDTH: u16 = 2;
pub const CELL_HEIGHT: u16 = 1;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step away in `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Linear-scan membership test over a sequence of occupied cells.
///
/// Shared by self-collision (head against the rest of the body) and food
/// placement (candidate against the whole body).
pub fn contains_cell<'a, I>(cells: I, target: Cell) -> bool
where
    I: IntoIterator<Item = &'a Cell>,
{
    cells.into_iter().any(|&cell| cell == target)
}

/// Outer size of the bordered board for a square grid of `cell_count` cells
pub fn board_size(cell_count: i32) -> (u16, u16) {
    let n = cell_count as u16;
    (n * CELL_WIDTH + 2, n * CELL_HEIGHT + 2)
}

/// Screen rectangle of a cell inside a bordered board rectangle.
///
/// Callers only pass cells inside [0, cell_count); the engine resets before
/// an out-of-bounds head ever reaches the renderer.
pub fn cell_rect(cell: Cell, board: Rect) -> Rect {
    Rect::new(
        board.x + 1 + cell.x as u16 * CELL_WIDTH,
        board.y + 1 + cell.y as u16 * CELL_HEIGHT,
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Down.is_opposite(Direction::Down));
    }

    #[test]
    fn test_cell_step() {
        let cell = Cell::new(6, 9);
        assert_eq!(cell.step(Direction::Down), Cell::new(6, 10));
        assert_eq!(cell.step(Direction::Up), Cell::new(6, 8));
        assert_eq!(cell.step(Direction::Left), Cell::new(5, 9));
        assert_eq!(cell.step(Direction::Right), Cell::new(7, 9));
    }

    #[test]
    fn test_contains_cell() {
        let cells = [Cell::new(6, 9), Cell::new(5, 9), Cell::new(4, 9)];
        assert!(contains_cell(&cells, Cell::new(5, 9)));
        assert!(!contains_cell(&cells, Cell::new(6, 10)));

        let empty: [Cell; 0] = [];
        assert!(!contains_cell(&empty, Cell::new(0, 0)));
    }

    #[test]
    fn test_board_size() {
        assert_eq!(board_size(25), (52, 27));
    }

    #[test]
    fn test_cell_rect() {
        let board = Rect::new(10, 5, 52, 27);
        assert_eq!(cell_rect(Cell::new(0, 0), board), Rect::new(11, 6, 2, 1));
        assert_eq!(cell_rect(Cell::new(3, 2), board), Rect::new(17, 8, 2, 1));
    }
}
