//! Win/draw evaluation. Pure functions over a [`Board`].

use crate::board::{Board, BB};
use crate::common::{GameResult, Player};
use crate::config::{WinLine, WIN_LINES};

fn line_mask(line: &WinLine) -> BB {
    BB::from_fn(|i| line.contains(&i))
}

/// The first line in [`WIN_LINES`] order held entirely by one player.
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES.iter().find_map(|line| {
        let mask = line_mask(line);
        [Player::X, Player::O]
            .into_iter()
            .find(|&p| board.marks(p).contains(mask))
            .map(|p| (p, *line))
    })
}

/// Decide whether the game on `board` is won, drawn or still going.
///
/// A completed line takes precedence over a full board.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some((winner, _)) = winning_line(board) {
        GameResult::Win(winner)
    } else if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
