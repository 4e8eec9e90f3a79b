#![cfg(feature = "std")]

//! Rendering helpers for CLI front ends. The engine itself never prints;
//! hosts render from snapshots.

use crate::{
    board::{Board, Cell},
    config::BOARD_SIZE,
    game::{GameState, Phase},
};

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Mark(p) => match p {
            crate::board::Player::X => 'X',
            crate::board::Player::O => 'O',
        },
    }
}

/// Print the grid with row/column indices, matching the coordinates
/// `apply_move` expects.
pub fn print_board(board: &Board) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        print!(" {}", c);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r);
        for c in 0..BOARD_SIZE {
            let cell = board.cell(r, c).unwrap_or(Cell::Empty);
            print!(" {}", cell_char(cell));
        }
        println!();
    }
}

/// One-line status for a snapshot: whose turn it is, or the game result.
pub fn status_message(state: &GameState) -> String {
    match state.phase {
        Phase::InProgress => format!("Player {}'s turn", state.current_player),
        Phase::Won(p) => format!("Player {} wins!", p),
        Phase::Drawn => "The game is a draw!".to_string(),
    }
}
