use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use tictactoe_common::games::tictactoe::{Board, GameBroadcaster, HumanMove, Mark, MoveSource};
use tictactoe_common::log;

const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

pub fn parse_move(line: &str) -> HumanMove {
    let trimmed = line.trim();
    if QUIT_WORDS.iter().any(|word| trimmed.eq_ignore_ascii_case(word)) {
        return HumanMove::Quit;
    }
    match trimmed.parse::<i64>() {
        Ok(position) => HumanMove::Position(position),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                HumanMove::OutOfRange(trimmed.to_string())
            }
            _ => HumanMove::NotANumber(trimmed.to_string()),
        },
    }
}

/// Prompts on `output` and reads one line per request from `input`.
/// End of input counts as quitting.
pub struct ConsoleMoveSource<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleMoveSource<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleMoveSource<R, W> {
    fn request_move(&mut self, _board: &Board, player_name: &str, mark: Mark) -> HumanMove {
        let prompt = write!(
            self.output,
            "{}, enter a new position for {}: ",
            player_name, mark
        )
        .and_then(|_| self.output.flush());
        if let Err(e) = prompt {
            log!("Failed to write prompt: {}", e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => HumanMove::Quit,
            Ok(_) => parse_move(&line),
            Err(e) => {
                log!("Failed to read input: {}", e);
                HumanMove::Quit
            }
        }
    }
}

pub struct ConsoleBroadcaster<W: Write> {
    output: W,
}

impl<W: Write> ConsoleBroadcaster<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    fn write_block(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{}", text).and_then(|_| self.output.flush()) {
            log!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> GameBroadcaster for ConsoleBroadcaster<W> {
    fn show_board(&mut self, board: &Board) {
        self.write_block(&board.to_string());
    }

    fn show_message(&mut self, message: &str) {
        self.write_block(message);
    }
}
