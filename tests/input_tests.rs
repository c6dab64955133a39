use std::io::{self, BufRead, Read};

use tictactoe::{
    interrupt_farewell, parse_move, run_session, Board, Cancelled, Console, LineSource,
    MoveError, Phase, PhaseTracker, Player,
};

const PROMPT_X: &str = "Player X, enter a move (1-9): ";

fn console(input: &str) -> Console<&[u8], Vec<u8>> {
    Console::new(input.as_bytes(), Vec::new())
}

fn output(console: Console<&[u8], Vec<u8>>) -> String {
    String::from_utf8(console.into_inner().1).unwrap()
}

#[test]
fn test_parse_move_validation_order() {
    let mut board = Board::new();
    board.place(4, Player::O).unwrap();

    assert_eq!(parse_move("", &board), Err(MoveError::Empty));
    assert_eq!(parse_move("   \t", &board), Err(MoveError::Empty));
    assert_eq!(parse_move("abc", &board), Err(MoveError::NotAnInteger));
    assert_eq!(parse_move("4.5", &board), Err(MoveError::NotAnInteger));
    assert_eq!(parse_move("5x", &board), Err(MoveError::NotAnInteger));
    assert_eq!(parse_move("0", &board), Err(MoveError::OutOfRange));
    assert_eq!(parse_move("10", &board), Err(MoveError::OutOfRange));
    assert_eq!(parse_move("-3", &board), Err(MoveError::OutOfRange));
    assert_eq!(
        parse_move("99999999999999999999999", &board),
        Err(MoveError::OutOfRange)
    );
    assert_eq!(parse_move("5", &board), Err(MoveError::CellTaken));
    assert_eq!(parse_move(" 1 ", &board), Ok(0));
    assert_eq!(parse_move("+9", &board), Ok(8));
}

#[test]
fn test_move_error_messages() {
    assert_eq!(MoveError::Empty.to_string(), "Please enter a number between 1 and 9.");
    assert_eq!(
        MoveError::NotAnInteger.to_string(),
        "Please enter a valid integer from 1 to 9."
    );
    assert_eq!(
        MoveError::OutOfRange.to_string(),
        "Invalid position. Choose a number from 1 to 9."
    );
    assert_eq!(
        MoveError::CellTaken.to_string(),
        "That cell is already taken. Pick another one."
    );
}

#[test]
fn test_parse_move_never_returns_taken_cell() {
    let mut board = Board::new();
    for i in [0, 2, 4, 6, 8] {
        board.place(i, Player::X).unwrap();
    }
    for position in 1..=9 {
        match parse_move(&position.to_string(), &board) {
            Ok(index) => {
                assert!(index < 9);
                assert!(board.is_free(index));
            }
            Err(e) => assert_eq!(e, MoveError::CellTaken),
        }
    }
}

#[test]
fn test_get_move_reprompts_until_valid() {
    let mut console = console("0\n10\nabc\n5\n");
    let index = console.get_move(&Board::new(), Player::X).unwrap();
    assert_eq!(index, 4);

    let out = output(console);
    assert_eq!(out.matches(PROMPT_X).count(), 4);
    assert_eq!(out.matches("Invalid position. Choose a number from 1 to 9.").count(), 2);
    assert_eq!(out.matches("Please enter a valid integer from 1 to 9.").count(), 1);
}

#[test]
fn test_get_move_rejects_taken_and_empty() {
    let mut board = Board::new();
    board.place(0, Player::X).unwrap();
    let mut console = console("\n1\n2\n");
    assert_eq!(console.get_move(&board, Player::O).unwrap(), 1);

    let out = output(console);
    assert_eq!(out.matches("Player O, enter a move (1-9): ").count(), 3);
    assert!(out.contains("Please enter a number between 1 and 9."));
    assert!(out.contains("That cell is already taken. Pick another one."));
}

#[test]
fn test_get_move_accepts_crlf() {
    let mut console = console("7\r\n");
    assert_eq!(console.get_move(&Board::new(), Player::X).unwrap(), 6);
}

#[test]
fn test_get_move_end_of_input_cancels() {
    let mut console = console("abc\n");
    assert_eq!(
        console.get_move(&Board::new(), Player::X).unwrap_err(),
        Cancelled::EndOfInput
    );
    let out = output(console);
    assert_eq!(out.matches(PROMPT_X).count(), 2);
    assert!(out.ends_with("\nInput interrupted. Exiting game.\n"));
}

/// Yields one line, then fails the way an interrupted read does.
struct InterruptAfterOne {
    sent: bool,
}

impl Read for InterruptAfterOne {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        unreachable!("only BufRead is used")
    }
}

impl BufRead for InterruptAfterOne {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.sent {
            Err(io::Error::new(io::ErrorKind::Other, "interrupted by user"))
        } else {
            Ok(b"x\n")
        }
    }

    fn consume(&mut self, _amt: usize) {
        self.sent = true;
    }
}

#[test]
fn test_read_error_cancels() {
    let mut source = InterruptAfterOne { sent: false };
    assert_eq!(source.next_line().unwrap(), "x");
    assert_eq!(source.next_line().unwrap_err(), Cancelled::Interrupted);

    let mut console = Console::new(InterruptAfterOne { sent: false }, Vec::new());
    assert_eq!(
        console.get_move(&Board::new(), Player::X).unwrap_err(),
        Cancelled::Interrupted
    );
}

#[test]
fn test_invalid_utf8_is_rejected_not_cancelled() {
    let mut input = vec![0xff, 0xfe, b'\n'];
    input.extend_from_slice(b"5\n");
    let mut console = Console::new(input.as_slice(), Vec::new());
    assert_eq!(console.get_move(&Board::new(), Player::X).unwrap(), 4);

    let out = String::from_utf8(console.into_inner().1).unwrap();
    assert_eq!(out.matches(PROMPT_X).count(), 2);
    assert!(out.contains("Please enter a valid integer from 1 to 9."));
    assert!(!out.contains("Input interrupted"));
}

#[test]
fn test_farewell_follows_phase() {
    assert_eq!(interrupt_farewell(Phase::Move), "\nInput interrupted. Exiting game.");
    assert_eq!(interrupt_farewell(Phase::Replay), "\nGoodbye!");
    assert_eq!(interrupt_farewell(Phase::Idle), "\nGoodbye!");
}

/// Records the shared phase each time a line is requested.
struct PhaseRecorder {
    lines: Vec<&'static str>,
    tracker: PhaseTracker,
    seen: Vec<Phase>,
}

impl LineSource for PhaseRecorder {
    fn next_line(&mut self) -> Result<String, Cancelled> {
        self.seen.push(self.tracker.get());
        self.lines.pop().map(String::from).ok_or(Cancelled::EndOfInput)
    }
}

#[test]
fn test_phase_tracks_prompts() {
    let tracker = PhaseTracker::new();
    let source = PhaseRecorder {
        // X wins on the top row, then decline
        lines: vec!["1", "4", "2", "5", "3", "n"].into_iter().rev().collect(),
        tracker: tracker.clone(),
        seen: Vec::new(),
    };
    let mut console = Console::new(source, Vec::new()).with_phase(tracker.clone());
    run_session(&mut console).unwrap();

    let seen = console.into_inner().0.seen;
    assert_eq!(seen, [vec![Phase::Move; 5], vec![Phase::Replay]].concat());
    assert_eq!(tracker.get(), Phase::Idle);
}
