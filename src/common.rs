//! Common types for tic-tac-toe: players, cells, game results and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// One of the two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after `self`.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Occupancy of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(p) => Some(p),
        }
    }
}

/// Verdict of the win/draw evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    InProgress,
    Win(Player),
    Draw,
}

impl GameResult {
    /// `true` for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }
}

/// Errors returned by board and engine operations.
///
/// These are precondition violations on the caller's side; the console never
/// produces them because the move handler validates input first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside `0..9`.
    CellOutOfRange(usize),
    /// Cell already holds a mark.
    CellOccupied(usize),
    /// The game already reached a win or a draw.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { index } => BoardError::CellOutOfRange(index),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::CellOutOfRange(i) => write!(f, "Cell index {} is out of range", i),
            BoardError::CellOccupied(i) => write!(f, "Cell {} is already occupied", i + 1),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
