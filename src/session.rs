#![cfg(feature = "std")]

//! Repeated games with a replay prompt between them.

use std::io::Write;

use log::info;

use crate::{
    common::{BoardError, GameResult, Player},
    input::{interrupt_farewell, Cancelled, Console, LineSource, Phase},
    turn::{play_game, PlayError},
};

const REPLAY_PROMPT: &str = "Play again? (y/n): ";
const FAREWELL: &str = "Thanks for playing. Goodbye!";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user answered something other than yes at the replay prompt.
    Declined,
    /// Input ended or was interrupted, during a game or at the replay prompt.
    Cancelled(Cancelled),
}

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games played to a result. A game abandoned mid-way is not counted.
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub end: SessionEnd,
}

impl SessionSummary {
    fn new() -> Self {
        Self {
            games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            end: SessionEnd::Declined,
        }
    }

    fn record(&mut self, result: GameResult) {
        self.games += 1;
        match result {
            GameResult::Win(Player::X) => self.x_wins += 1,
            GameResult::Win(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }
}

/// `true` for "y" or "yes" in any case, ignoring surrounding whitespace.
pub fn wants_another_game(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Play games on `console` until the user declines or input stops.
///
/// Cancellation is never an error here: it ends the session with a single
/// farewell. `Err` is only returned for a board precondition violation.
pub fn run_session<S: LineSource, W: Write>(
    console: &mut Console<S, W>,
) -> Result<SessionSummary, BoardError> {
    let mut summary = SessionSummary::new();
    loop {
        match play_game(console) {
            Ok(result) => summary.record(result),
            Err(PlayError::Cancelled(c)) => {
                // The move prompt already said goodbye.
                summary.end = SessionEnd::Cancelled(c);
                break;
            }
            Err(PlayError::IllegalMove(e)) => return Err(e),
        }

        console.phase().set(Phase::Replay);
        let answer = console.prompt(REPLAY_PROMPT);
        console.phase().set(Phase::Idle);
        let answer = match answer {
            Ok(answer) => answer,
            Err(c) => {
                let _ = console.say(interrupt_farewell(Phase::Replay));
                summary.end = SessionEnd::Cancelled(c);
                break;
            }
        };
        if !wants_another_game(&answer) {
            let _ = console.say(FAREWELL);
            summary.end = SessionEnd::Declined;
            break;
        }
    }
    info!(
        "session finished: {} games (X {}, O {}, draws {}), end: {:?}",
        summary.games, summary.x_wins, summary.o_wins, summary.draws, summary.end
    );
    Ok(summary)
}
