use log::{debug, info, trace};

use super::{Board, Cell, Placement, Player, HEIGHT, WIDTH};
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// A placed piece: the chosen column and the row it fell to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub row: usize,
    pub column: usize,
}

/// Result of one atomic turn step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The column had no room; the same player is still to move.
    ColumnFull,
    Placed { at: Move, outcome: GameOutcome },
}

/// Board and turn state for one game.
///
/// The primitives (`drop_piece`, `check_win`, `check_tie`, `advance_turn`)
/// can be driven individually; `play` sequences them as a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesEngine {
    board: Board,
    active: Player,
    outcome: GameOutcome,
}

impl RulesEngine {
    /// Start a game on the standard 7x6 board
    pub fn new() -> Self {
        Self::with_dimensions(WIDTH, HEIGHT)
    }

    /// Start a game on a `width` x `height` board. Each side is capped at
    /// [`MAX_SIDE`](super::MAX_SIDE).
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        RulesEngine {
            board: Board::new(width, height),
            active: Player::One,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Replace all state with an empty board and Player One to move
    pub fn initialize(&mut self, width: usize, height: usize) {
        *self = Self::with_dimensions(width, height);
        info!("new game on a {}x{} board", self.width(), self.height());
    }

    /// Start a new game keeping the current dimensions
    pub fn restart(&mut self) {
        self.initialize(self.board.width(), self.board.height());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Outcome recorded by the last `play`; `InProgress` until a turn ends the game
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Read a cell for rendering
    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, EngineError> {
        self.board
            .get(row, column)
            .ok_or_else(|| self.cell_out_of_range(row, column))
    }

    /// Drop the active player's piece into `column`
    pub fn drop_piece(&mut self, column: usize) -> Result<Placement, EngineError> {
        let placement = self.board.drop_piece(column, self.active)?;
        match placement {
            Placement::Landed { row } => {
                debug!("player {} dropped at ({row}, {column})", self.active.number())
            }
            Placement::ColumnFull => trace!("column {column} is full, drop ignored"),
        }
        Ok(placement)
    }

    /// Check whether the active player's piece at the anchor (row, column)
    /// completes four in a row
    pub fn check_win(&self, row: usize, column: usize) -> Result<bool, EngineError> {
        if self.board.get(row, column).is_none() {
            return Err(self.cell_out_of_range(row, column));
        }
        Ok(self.board.connects_four(row, column, self.active))
    }

    /// True when no empty cell remains
    pub fn check_tie(&self) -> bool {
        self.board.is_full()
    }

    /// Hand the turn to the other player
    pub fn advance_turn(&mut self) {
        self.active = self.active.other();
    }

    /// Play one full turn for the active player: drop, then check for a win,
    /// then for a tie, then pass the turn if the game goes on.
    pub fn play(&mut self, column: usize) -> Result<Turn, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let row = match self.drop_piece(column)? {
            Placement::Landed { row } => row,
            Placement::ColumnFull => return Ok(Turn::ColumnFull),
        };

        let outcome = if self.check_win(row, column)? {
            info!("player {} wins", self.active.number());
            GameOutcome::Win(self.active)
        } else if self.check_tie() {
            info!("board full, game tied");
            GameOutcome::Tie
        } else {
            self.advance_turn();
            GameOutcome::InProgress
        };

        self.outcome = outcome;
        Ok(Turn::Placed {
            at: Move { row, column },
            outcome,
        })
    }

    fn cell_out_of_range(&self, row: usize, column: usize) -> EngineError {
        EngineError::CellOutOfRange {
            row,
            column,
            width: self.board.width(),
            height: self.board.height(),
        }
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}
