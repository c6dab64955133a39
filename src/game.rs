use log::{debug, info};

use crate::{
    board::Board,
    common::{BoardError, GameResult, Player},
    rules,
};

/// Where the turn manager is in a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the current player's move.
    AwaitingMove,
    /// A move was applied and the board is being judged.
    Evaluating,
    /// The game ended in a win or a draw.
    Terminal,
}

/// Core game logic for one game: the board, whose turn it is, and the result.
pub struct GameEngine {
    board: Board,
    current: Player,
    state: TurnState,
    result: GameResult,
}

impl GameEngine {
    /// Fresh game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
            state: TurnState::AwaitingMove,
            result: GameResult::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose move is awaited. Unchanged once the game is over.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turn_state(&self) -> TurnState {
        self.state
    }

    pub fn status(&self) -> GameResult {
        self.result
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.board.mark_count()
    }

    /// Place the current player's mark at `index` and judge the board.
    ///
    /// On a win or draw the engine becomes [`TurnState::Terminal`]; otherwise
    /// the turn passes to the other player.
    pub fn apply_move(&mut self, index: usize) -> Result<GameResult, BoardError> {
        if self.state == TurnState::Terminal {
            return Err(BoardError::GameOver);
        }
        self.board.place(index, self.current)?;
        debug!("player {} took cell {}", self.current, index + 1);
        self.state = TurnState::Evaluating;

        self.result = rules::evaluate(&self.board);
        if self.result.is_terminal() {
            info!(
                "game over after {} moves: {:?}",
                self.move_count(),
                self.result
            );
            self.state = TurnState::Terminal;
        } else {
            self.current = self.current.other();
            self.state = TurnState::AwaitingMove;
        }
        Ok(self.result)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
