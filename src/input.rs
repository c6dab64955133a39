#![cfg(feature = "std")]

//! Line-based console input: move validation and the [`Console`] that
//! prompts for moves.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use std::string::String;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use log::{debug, warn};

use crate::{
    board::Board,
    common::Player,
    config::NUM_CELLS,
};

/// Printed when input stops at a move prompt.
pub const INTERRUPTED_MESSAGE: &str = "\nInput interrupted. Exiting game.";
/// Printed when input stops anywhere else, e.g. at the replay prompt.
pub const INTERRUPT_FAREWELL: &str = "\nGoodbye!";

/// The input stream ended or was interrupted. Ends the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cancelled {
    EndOfInput,
    Interrupted,
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cancelled::EndOfInput => write!(f, "end of input"),
            Cancelled::Interrupted => write!(f, "input interrupted"),
        }
    }
}

impl std::error::Error for Cancelled {}

impl From<io::Error> for Cancelled {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Cancelled::EndOfInput
        } else {
            warn!("console i/o failed: {}", err);
            Cancelled::Interrupted
        }
    }
}

/// Source of input lines: the next line, or the end of the stream.
pub trait LineSource {
    /// Next line without its line terminator.
    fn next_line(&mut self) -> Result<String, Cancelled>;
}

/// Invalid UTF-8 is replaced rather than rejected, so a garbled line reaches
/// move validation instead of ending the session.
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<String, Cancelled> {
        let mut raw = Vec::new();
        if self.read_until(b'\n', &mut raw)? == 0 {
            return Err(Cancelled::EndOfInput);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

/// Which kind of prompt the console is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not reading, or reading something other than a move.
    Idle = 0,
    Move = 1,
    Replay = 2,
}

/// Farewell to print when input stops during `phase`.
pub fn interrupt_farewell(phase: Phase) -> &'static str {
    match phase {
        Phase::Move => INTERRUPTED_MESSAGE,
        Phase::Idle | Phase::Replay => INTERRUPT_FAREWELL,
    }
}

/// Current [`Phase`], shared between the console and a signal watcher.
#[derive(Debug, Clone, Default)]
pub struct PhaseTracker(Arc<AtomicU8>);

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, phase: Phase) {
        self.0.store(phase as u8, Ordering::SeqCst);
    }

    pub fn get(&self) -> Phase {
        match self.0.load(Ordering::SeqCst) {
            1 => Phase::Move,
            2 => Phase::Replay,
            _ => Phase::Idle,
        }
    }
}

/// Why a line was rejected as a move. Never escalates; the player is asked again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    Empty,
    NotAnInteger,
    OutOfRange,
    CellTaken,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Empty => write!(f, "Please enter a number between 1 and 9."),
            MoveError::NotAnInteger => write!(f, "Please enter a valid integer from 1 to 9."),
            MoveError::OutOfRange => write!(f, "Invalid position. Choose a number from 1 to 9."),
            MoveError::CellTaken => write!(f, "That cell is already taken. Pick another one."),
        }
    }
}

impl std::error::Error for MoveError {}

/// Turn one line of user input into a 0-based cell index on `board`.
pub fn parse_move(input: &str, board: &Board) -> Result<usize, MoveError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MoveError::Empty);
    }
    let position: i64 = input.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => MoveError::OutOfRange,
        _ => MoveError::NotAnInteger,
    })?;
    if !(1..=NUM_CELLS as i64).contains(&position) {
        return Err(MoveError::OutOfRange);
    }
    let index = (position - 1) as usize;
    if !board.is_free(index) {
        return Err(MoveError::CellTaken);
    }
    Ok(index)
}

/// Prompted console over any [`LineSource`] and output writer.
pub struct Console<S, W> {
    source: S,
    out: W,
    phase: PhaseTracker,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<S: LineSource, W: Write> Console<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            phase: PhaseTracker::new(),
        }
    }

    /// Report prompt phases through `tracker` instead of a private one.
    pub fn with_phase(mut self, tracker: PhaseTracker) -> Self {
        self.phase = tracker;
        self
    }

    pub fn phase(&self) -> &PhaseTracker {
        &self.phase
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), Cancelled> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Write `text` without a newline and read the reply.
    pub fn prompt(&mut self, text: &str) -> Result<String, Cancelled> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.source.next_line()
    }

    /// Print the board surrounded by blank lines.
    pub fn show_board(&mut self, board: &Board) -> Result<(), Cancelled> {
        self.say(format_args!("\n\n{}\n\n", board))
    }

    /// Ask `player` for a move until a legal one arrives.
    ///
    /// Returns the 0-based index of an empty cell. End of input or an
    /// interrupt prints the exit notice and returns `Err`; the caller must
    /// stop the session.
    pub fn get_move(&mut self, board: &Board, player: Player) -> Result<usize, Cancelled> {
        self.phase.set(Phase::Move);
        let result = self.read_move(board, player);
        self.phase.set(Phase::Idle);
        result
    }

    fn read_move(&mut self, board: &Board, player: Player) -> Result<usize, Cancelled> {
        let prompt = format!("Player {}, enter a move (1-9): ", player);
        loop {
            let line = match self.prompt(&prompt) {
                Ok(line) => line,
                Err(cancelled) => {
                    debug!("move prompt cancelled: {}", cancelled);
                    // Best effort; the session is ending either way.
                    let _ = self.say(interrupt_farewell(Phase::Move));
                    return Err(cancelled);
                }
            };
            match parse_move(&line, board) {
                Ok(index) => return Ok(index),
                Err(e) => {
                    debug!("rejected move {:?}: {:?}", line, e);
                    self.say(e)?;
                }
            }
        }
    }

    /// Consume the console, returning its parts.
    pub fn into_inner(self) -> (S, W) {
        (self.source, self.out)
    }
}
