//! Core game logic: move validation, turn management, and terminal detection.

use crate::{
    board::{Board, Player},
    common::MoveError,
};

/// Terminal/non-terminal status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    InProgress,
    Won(Player),
    Drawn,
}

impl Phase {
    /// Returns `true` once the game has concluded in a win or a draw.
    pub fn is_terminal(self) -> bool {
        self != Phase::InProgress
    }
}

/// Snapshot of a game: board contents, whose turn it is, and phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub phase: Phase,
}

impl GameState {
    fn fresh() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::InProgress,
        }
    }
}

/// Core rules engine. Owns the authoritative [`GameState`] and enforces all
/// rules for state transitions; hosts only ever receive snapshots.
///
/// Single-threaded and synchronous: every call completes before returning and
/// performs no I/O. Hosts wanting several simultaneous games give each
/// session its own engine instance.
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an engine holding a fresh game: all cells empty, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::fresh(),
        }
    }

    /// Discard the current game and start a fresh one, returning the new
    /// snapshot. No move history is retained.
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::fresh();
        self.state
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Attempt to place `player`'s mark at (row, col).
    ///
    /// Validation order, first failure wins:
    /// 1. [`MoveError::GameAlreadyOver`] if the phase is terminal,
    /// 2. [`MoveError::OutOfBounds`] if row or col is outside the grid,
    /// 3. [`MoveError::CellOccupied`] if the cell already bears a mark,
    /// 4. [`MoveError::NotYourTurn`] if `player` is not the current player.
    ///
    /// On success the returned snapshot reflects the applied move: the phase
    /// becomes `Won(player)` if the move completed a line (no turn switch),
    /// `Drawn` if it filled the board without one, and otherwise the turn
    /// passes to the other player. A rejected move leaves state unchanged.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<GameState, MoveError> {
        if self.state.phase.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.state.board.cell(row, col)?.is_empty() {
            return Err(MoveError::CellOccupied);
        }
        if player != self.state.current_player {
            return Err(MoveError::NotYourTurn);
        }

        self.state.board.mark(row, col, player)?;

        // Win detection uses the post-move board, before any turn switch.
        if self.state.board.has_win() {
            self.state.phase = Phase::Won(player);
        } else if self.state.board.is_full() {
            self.state.phase = Phase::Drawn;
        } else {
            self.state.current_player = player.other();
        }
        Ok(self.state)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
