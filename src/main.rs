#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;

#[cfg(feature = "std")]
use tictactoe::{cli, init_logging, GameEngine};

/// Two-player Tic-Tac-Toe on the terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Play a scripted move sequence (e.g. --script "0,0 1,1 0,1") and exit
    /// instead of starting an interactive game.
    #[arg(long)]
    script: Option<String>,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();
    let mut engine = GameEngine::new();
    match args.script {
        Some(script) => cli::run_script(&mut engine, &script),
        None => cli::run_interactive(&mut engine),
    }
}
