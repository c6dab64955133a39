#![cfg(feature = "std")]

//! Where moves come from during a game.
//!
//! The turn manager asks a [`MoveSource`] for every move and tells it about
//! the board as the game progresses. [`Console`] is the interactive
//! implementation used by both players at the same terminal.

use std::io::Write;

use crate::{
    board::Board,
    common::{GameResult, Player},
    input::{Cancelled, Console, LineSource},
};

const WELCOME: &str = "Welcome to Tic-Tac-Toe!";
const POSITIONS_HINT: &str = "Positions are numbered 1 to 9 as shown on the board.";

/// Interface implemented by anything that can supply moves to a game.
pub trait MoveSource {
    /// Choose an empty cell (0-based) for `player` on `board`.
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, Cancelled>;

    /// A new game began on the empty `board`.
    fn game_started(&mut self, _board: &Board) -> Result<(), Cancelled> {
        Ok(())
    }

    /// A move was applied.
    fn move_applied(&mut self, _board: &Board) -> Result<(), Cancelled> {
        Ok(())
    }

    /// The game reached a win or a draw.
    fn game_over(&mut self, _result: GameResult) -> Result<(), Cancelled> {
        Ok(())
    }
}

impl<S: LineSource, W: Write> MoveSource for Console<S, W> {
    fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, Cancelled> {
        self.get_move(board, player)
    }

    fn game_started(&mut self, board: &Board) -> Result<(), Cancelled> {
        self.say(WELCOME)?;
        self.say(POSITIONS_HINT)?;
        self.show_board(board)
    }

    fn move_applied(&mut self, board: &Board) -> Result<(), Cancelled> {
        self.show_board(board)
    }

    fn game_over(&mut self, result: GameResult) -> Result<(), Cancelled> {
        match result {
            GameResult::Win(winner) => {
                self.say(format_args!("Player {} wins! Congratulations!", winner))
            }
            GameResult::Draw => self.say("It's a draw!"),
            GameResult::InProgress => Ok(()),
        }
    }
}
