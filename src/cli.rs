#![cfg(feature = "std")]

//! Interactive and scripted CLI front ends. Both drive the engine purely
//! through its public snapshot interface and render after every transition.

use std::io::{self, Write};

use anyhow::{anyhow, Context};
use log::debug;

use crate::{
    game::GameEngine,
    ui::{print_board, status_message},
};

fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Run an interactive game on stdin/stdout. Accepts moves as `row col` (or
/// `row,col`), plus `reset` and `quit`. Rejected moves are reported and the
/// board is left untouched; once the game concludes, only `reset` and `quit`
/// are accepted.
pub fn run_interactive(engine: &mut GameEngine) -> anyhow::Result<()> {
    println!("Tic-Tac-Toe. Enter moves as 'row col' (0-2), 'reset', or 'quit'.");
    loop {
        let state = engine.state();
        println!();
        print_board(&state.board);
        println!("{}", status_message(&state));
        if state.phase.is_terminal() {
            println!("Enter 'reset' to play again or 'quit' to exit.");
        }

        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;
        let mut line = String::new();
        let read = io::stdin()
            .read_line(&mut line)
            .context("failed to read stdin")?;
        if read == 0 {
            // EOF ends the session
            return Ok(());
        }
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "reset" => {
                debug!("resetting game");
                engine.reset();
                continue;
            }
            _ => {}
        }

        let Some((row, col)) = parse_move(line) else {
            println!("Invalid input: expected 'row col', 'reset', or 'quit'");
            continue;
        };
        let player = engine.state().current_player;
        match engine.apply_move(row, col, player) {
            Ok(next) => debug!("player {} marked ({}, {}) -> {:?}", player, row, col, next.phase),
            Err(e) => println!("Invalid move: {}", e),
        }
    }
}

/// Play a whitespace-separated sequence of `row,col` moves, rendering after
/// each one, and stop at the first rejected move. Players alternate starting
/// with X, as in an interactive game.
pub fn run_script(engine: &mut GameEngine, script: &str) -> anyhow::Result<()> {
    for token in script.split_whitespace() {
        let (row, col) =
            parse_move(token).ok_or_else(|| anyhow!("invalid move '{}': expected row,col", token))?;
        let player = engine.state().current_player;
        let state = engine
            .apply_move(row, col, player)
            .map_err(|e| anyhow!("move {} at ({}, {}) rejected: {}", player, row, col, e))?;
        println!();
        print_board(&state.board);
        println!("{}", status_message(&state));
    }
    Ok(())
}
