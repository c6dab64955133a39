#![cfg(feature = "std")]

use std::fmt;

use crate::{
    common::{BoardError, GameResult},
    game::{GameEngine, TurnState},
    input::Cancelled,
    player::MoveSource,
};

/// Why a game stopped before reaching a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// The move source's input ended or was interrupted.
    Cancelled(Cancelled),
    /// The move source returned a move the board rejects.
    IllegalMove(BoardError),
}

impl From<Cancelled> for PlayError {
    fn from(c: Cancelled) -> Self {
        PlayError::Cancelled(c)
    }
}

impl From<BoardError> for PlayError {
    fn from(e: BoardError) -> Self {
        PlayError::IllegalMove(e)
    }
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::Cancelled(c) => write!(f, "game cancelled: {}", c),
            PlayError::IllegalMove(e) => write!(f, "illegal move: {}", e),
        }
    }
}

impl std::error::Error for PlayError {}

/// Run one game to completion, asking `source` for every move.
///
/// X moves first and the players alternate until the board is won or full.
pub fn play_game<M: MoveSource + ?Sized>(source: &mut M) -> Result<GameResult, PlayError> {
    let mut engine = GameEngine::new();
    source.game_started(engine.board())?;

    while engine.turn_state() == TurnState::AwaitingMove {
        let player = engine.current_player();
        let index = source.select_move(engine.board(), player)?;
        let result = engine.apply_move(index)?;
        source.move_applied(engine.board())?;
        if result.is_terminal() {
            source.game_over(result)?;
        }
    }
    Ok(engine.status())
}
