//! The 3x3 grid, kept as one `BitBoard` per player.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Cell, Player};
use crate::config::{BOARD_SIZE, NUM_CELLS};

pub(crate) type BB = BitBoard<u16, BOARD_SIZE>;

/// Grid state. Cells are indexed 0..9 in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Build a board from a full snapshot, e.g. one returned by [`Board::cells`].
    pub fn from_cells(cells: [Cell; NUM_CELLS]) -> Self {
        Board {
            x: BB::from_fn(|i| cells[i] == Cell::Taken(Player::X)),
            o: BB::from_fn(|i| cells[i] == Cell::Taken(Player::O)),
        }
    }

    /// Read a single cell.
    pub fn cell(&self, index: usize) -> Result<Cell, BoardError> {
        if self.x.get(index)? {
            Ok(Cell::Taken(Player::X))
        } else if self.o.get(index)? {
            Ok(Cell::Taken(Player::O))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// `true` when `index` is on the board and holds no mark.
    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.cell(index), Ok(Cell::Empty))
    }

    /// Write `player`'s mark into an empty cell.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        if !self.cell(index)?.is_empty() {
            return Err(BoardError::CellOccupied(index));
        }
        match player {
            Player::X => self.x.set(index)?,
            Player::O => self.o.set(index)?,
        }
        Ok(())
    }

    /// Snapshot of all nine cells.
    pub fn cells(&self) -> [Cell; NUM_CELLS] {
        core::array::from_fn(|index| self.cell(index).unwrap_or_default())
    }

    /// Cells owned by `player`.
    pub(crate) fn marks(&self, player: Player) -> BB {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total number of marks, which equals the number of completed turns.
    pub fn mark_count(&self) -> usize {
        self.occupied().count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == BB::full()
    }

    /// Indices of empty cells, ascending.
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> {
        (!self.occupied()).iter_set_bits()
    }

    fn occupied(&self) -> BB {
        self.x | self.o
    }
}

/// Renders the grid with 1-based position numbers in empty cells:
///
/// ```text
///  X | 2 | 3
/// ---+---+---
///  4 | O | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            for col in 0..BOARD_SIZE {
                let index = row * BOARD_SIZE + col;
                if col > 0 {
                    write!(f, "|")?;
                }
                match cells[index] {
                    Cell::Taken(player) => write!(f, " {} ", player)?,
                    Cell::Empty => write!(f, " {} ", index + 1)?,
                }
            }
        }
        Ok(())
    }
}
