//! Board state: the 3x3 grid of cells plus pure win/draw queries.

use crate::common::MoveError;
use crate::config::{BOARD_SIZE, LINES};
use core::fmt;

/// One of the two game participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opposing player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// One position of the grid: empty, or marked by a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Mark(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Owned 3x3 grid. A cell transitions from empty to marked exactly once and
/// never reverts within a game; the engine hands out copies, never references
/// into this storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell contents at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        Ok(self.cells[row][col])
    }

    /// Mark an empty cell. Only the engine's validated move path calls this.
    pub(crate) fn mark(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        if !self.cell(row, col)?.is_empty() {
            return Err(MoveError::CellOccupied);
        }
        self.cells[row][col] = Cell::Mark(player);
        Ok(())
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|c| !c.is_empty()))
    }

    /// The player holding a completed line, if any. Scans the 8 winning
    /// lines; at most one player can hold one on a reachable board.
    pub fn winning_player(&self) -> Option<Player> {
        for line in LINES {
            let [(r0, c0), (r1, c1), (r2, c2)] = line;
            if let Cell::Mark(p) = self.cells[r0][c0] {
                if self.cells[r1][c1] == Cell::Mark(p) && self.cells[r2][c2] == Cell::Mark(p) {
                    return Some(p);
                }
            }
        }
        None
    }

    /// Returns `true` iff any winning line is complete.
    pub fn has_win(&self) -> bool {
        self.winning_player().is_some()
    }

    /// Returns `true` iff the board is full with no winning line. Checks the
    /// no-win condition itself rather than trusting the caller to have done
    /// so first.
    pub fn is_draw(&self) -> bool {
        !self.has_win() && self.is_full()
    }
}
