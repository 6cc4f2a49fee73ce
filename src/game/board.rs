use std::fmt;

use super::Player;
use crate::error::EngineError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;

/// Largest accepted width or height; larger requests are clamped.
pub const MAX_SIDE: usize = 64;

/// The four line orientations through an anchor: ↘/↖, vertical, ↙/↗, horizontal.
/// Each is scanned once with the listed delta and once with it negated.
const AXES: [(isize, isize); 4] = [(1, 1), (1, 0), (1, -1), (0, 1)];

/// Run length that wins the game.
const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player whose piece occupies this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::One => '1',
            Cell::Two => '2',
        }
    }
}

/// Result of dropping a piece into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The piece came to rest in this row.
    Landed { row: usize },
    /// Every cell of the column is occupied; nothing changed.
    ColumnFull,
}

/// A `height` x `width` grid stored row-major. Row 0 is the top, row
/// `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions, each clamped to
    /// [`MAX_SIDE`]
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.min(MAX_SIDE);
        let height = height.min(MAX_SIDE);
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, `None` when off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => cell != Cell::Empty,
            None => true,
        }
    }

    /// Drop a piece in a column; it falls to the lowest empty row.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<Placement, EngineError> {
        if col >= self.width {
            return Err(EngineError::ColumnOutOfRange {
                column: col,
                width: self.width,
            });
        }

        for row in (0..self.height).rev() {
            let idx = row * self.width + col;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = player.to_cell();
                return Ok(Placement::Landed { row });
            }
        }

        Ok(Placement::ColumnFull)
    }

    /// Check if every cell of the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Count consecutive `player` pieces starting one step from (row, col) in
    /// direction (d_row, d_col). The anchor itself is not counted.
    pub fn run_length(
        &self,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
        player: Player,
    ) -> usize {
        let target = player.to_cell();
        let mut count = 0;
        let mut r = row as isize + d_row;
        let mut c = col as isize + d_col;

        while r >= 0 && c >= 0 {
            match self.get(r as usize, c as usize) {
                Some(cell) if cell == target => {
                    count += 1;
                    r += d_row;
                    c += d_col;
                }
                _ => break,
            }
        }

        count
    }

    /// Check whether a line of four `player` pieces passes through (row, col),
    /// counting the anchor as one of `player`'s pieces.
    pub fn connects_four(&self, row: usize, col: usize, player: Player) -> bool {
        AXES.iter().any(|&(d_row, d_col)| {
            1 + self.run_length(row, col, d_row, d_col, player)
                + self.run_length(row, col, -d_row, -d_col, player)
                >= CONNECT
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.cells[row * self.width + col];
                write!(f, "{:^3}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..self.width {
            write!(f, "{:^3}", col + 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_row(board: &mut Board, col: usize, player: Player) -> usize {
        match board.drop_piece(col, player).unwrap() {
            Placement::Landed { row } => row,
            Placement::ColumnFull => panic!("column {col} unexpectedly full"),
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.width(), WIDTH);
        assert_eq!(board.height(), HEIGHT);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.get(HEIGHT, 0), None);
        assert_eq!(board.get(0, WIDTH), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = drop_row(&mut board, 3, Player::One);
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Cell::One));

        let row = drop_row(&mut board, 3, Player::Two);
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Cell::Two));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..HEIGHT {
            drop_row(&mut board, 0, Player::One);
        }

        let before = board.clone();
        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Player::Two), Ok(Placement::ColumnFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(EngineError::ColumnOutOfRange { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                drop_row(&mut board, col, Player::One);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(4, 2);
        assert_eq!(drop_row(&mut board, 3, Player::One), 1);
        assert_eq!(drop_row(&mut board, 3, Player::Two), 0);
        assert_eq!(board.drop_piece(3, Player::One), Ok(Placement::ColumnFull));
        assert!(board.drop_piece(4, Player::One).is_err());
    }

    #[test]
    fn test_dimensions_are_clamped() {
        let board = Board::new(usize::MAX, usize::MAX);
        assert_eq!(board.width(), MAX_SIDE);
        assert_eq!(board.height(), MAX_SIDE);
        assert_eq!(board.get(MAX_SIDE - 1, MAX_SIDE - 1), Some(Cell::Empty));
        assert_eq!(board.get(MAX_SIDE, 0), None);
    }

    #[test]
    fn test_run_length_stops_at_mismatch_and_edge() {
        let mut board = Board::default();
        for col in 0..3 {
            drop_row(&mut board, col, Player::One);
        }
        drop_row(&mut board, 3, Player::Two);

        // From column 0 heading right: columns 1 and 2 match, 3 does not.
        assert_eq!(board.run_length(5, 0, 0, 1, Player::One), 2);
        // Heading left from column 0 leaves the board immediately.
        assert_eq!(board.run_length(5, 0, 0, -1, Player::One), 0);
        // Heading down from the bottom row leaves the board.
        assert_eq!(board.run_length(5, 1, 1, 0, Player::One), 0);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            drop_row(&mut board, col, Player::One);
        }
        assert!(board.connects_four(5, 2, Player::One));
        assert!(!board.connects_four(5, 2, Player::Two));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            drop_row(&mut board, 3, Player::Two);
        }
        assert!(board.connects_four(2, 3, Player::Two));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Build a / diagonal from (5, 0) to (2, 3)
        drop_row(&mut board, 0, Player::One);

        drop_row(&mut board, 1, Player::Two);
        drop_row(&mut board, 1, Player::One);

        drop_row(&mut board, 2, Player::Two);
        drop_row(&mut board, 2, Player::Two);
        drop_row(&mut board, 2, Player::One);

        drop_row(&mut board, 3, Player::Two);
        drop_row(&mut board, 3, Player::Two);
        drop_row(&mut board, 3, Player::Two);
        let row = drop_row(&mut board, 3, Player::One);

        assert_eq!(row, 2);
        assert!(board.connects_four(row, 3, Player::One));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Build a \ diagonal from (2, 3) to (5, 6)
        drop_row(&mut board, 6, Player::One);

        drop_row(&mut board, 5, Player::Two);
        drop_row(&mut board, 5, Player::One);

        drop_row(&mut board, 4, Player::Two);
        drop_row(&mut board, 4, Player::Two);
        drop_row(&mut board, 4, Player::One);

        drop_row(&mut board, 3, Player::Two);
        drop_row(&mut board, 3, Player::Two);
        drop_row(&mut board, 3, Player::Two);
        let row = drop_row(&mut board, 3, Player::One);

        assert!(board.connects_four(row, 3, Player::One));
    }

    #[test]
    fn test_anchor_in_middle_of_line() {
        let mut board = Board::default();
        for col in [0, 1, 3] {
            drop_row(&mut board, col, Player::One);
        }
        let row = drop_row(&mut board, 2, Player::One);
        assert!(board.connects_four(row, 2, Player::One));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            drop_row(&mut board, col, Player::One);
        }
        assert!(!board.connects_four(5, 1, Player::One));
    }

    #[test]
    fn test_gap_breaks_run() {
        let mut board = Board::default();
        for col in [0, 1, 3, 4] {
            drop_row(&mut board, col, Player::One);
        }
        drop_row(&mut board, 2, Player::Two);
        assert!(!board.connects_four(5, 1, Player::One));
        assert!(!board.connects_four(5, 3, Player::One));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 2);
        drop_row(&mut board, 0, Player::One);
        drop_row(&mut board, 2, Player::Two);
        assert_eq!(board.to_string(), " .  .  . \n 1  .  2 \n 1  2  3 ");
    }
}
