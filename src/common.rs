//! Common types for Tic-Tac-Toe: move rejection errors.

/// Errors returned when a requested move is rejected.
///
/// A rejected move never mutates engine state; the caller decides whether to
/// retry (e.g. let the user pick another cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Row or column falls outside the 3x3 grid.
    OutOfBounds,
    /// Target cell already bears a mark.
    CellOccupied,
    /// The requesting player is not the player whose turn it is.
    NotYourTurn,
    /// The game has already concluded in a win or a draw.
    GameAlreadyOver,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "Position is out of bounds"),
            MoveError::CellOccupied => write!(f, "Position already occupied"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
