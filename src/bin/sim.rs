use clap::Parser;
use serde_json::json;
use tictactoe::{winning_line, GameEngine, GameResult, NUM_CELLS};

/// Replay a game from a list of positions and print the outcome as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 1-based positions, alternating X and O starting with X.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=NUM_CELLS as i64))]
    moves: Vec<u8>,
}

fn main() -> anyhow::Result<()> {
    tictactoe::init_logging();
    let args = Args::parse();

    let mut engine = GameEngine::new();
    for (turn, &position) in args.moves.iter().enumerate() {
        let player = engine.current_player();
        engine.apply_move(position as usize - 1).map_err(|e| {
            anyhow::anyhow!("move {} ({} at {}) rejected: {}", turn + 1, player, position, e)
        })?;
    }

    let board = engine.board();
    let line = winning_line(board).map(|(_, line)| line.map(|i| i + 1));
    let result = json!({
        "moves": args.moves,
        "result": engine.status(),
        "terminal": engine.status() != GameResult::InProgress,
        "next_player": (!engine.status().is_terminal()).then(|| engine.current_player()),
        "winning_line": line,
        "board": board.cells(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
