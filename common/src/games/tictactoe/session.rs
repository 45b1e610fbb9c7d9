use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::{best_ranked, rank_moves};
use super::types::{not_on_board_message, GameOutcome, Mark};
use super::win_detector::{evaluate, find_winning_line};

/// What the human asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HumanMove {
    Position(i64),
    /// An integer too large in magnitude to hold, kept as typed.
    OutOfRange(String),
    NotANumber(String),
    Quit,
}

pub trait MoveSource {
    fn request_move(&mut self, board: &Board, player_name: &str, mark: Mark) -> HumanMove;
}

pub trait GameBroadcaster {
    fn show_board(&mut self, board: &Board);
    fn show_message(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkAssignment {
    X,
    O,
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seats {
    pub human_mark: Mark,
    pub human_name: String,
    pub computer_name: String,
}

impl Seats {
    pub fn assign(
        assignment: MarkAssignment,
        human_name: String,
        computer_name: String,
        rng: &mut SessionRng,
    ) -> Self {
        let human_mark = match assignment {
            MarkAssignment::X => Mark::X,
            MarkAssignment::O => Mark::O,
            MarkAssignment::Random => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        Self {
            human_mark,
            human_name,
            computer_name,
        }
    }

    pub fn is_human(&self, mark: Mark) -> bool {
        mark == self.human_mark
    }

    pub fn name_for(&self, mark: Mark) -> &str {
        if self.is_human(mark) {
            &self.human_name
        } else {
            &self.computer_name
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameOutcome),
    Abandoned,
}

/// Owns the board for one game and alternates human and computer turns,
/// X first, until the board is won or full.
pub struct TicTacToeSession<S: MoveSource, B: GameBroadcaster> {
    board: Board,
    seats: Seats,
    move_count: usize,
    move_source: S,
    broadcaster: B,
}

impl<S: MoveSource, B: GameBroadcaster> TicTacToeSession<S, B> {
    pub fn new(seats: Seats, move_source: S, broadcaster: B) -> Self {
        Self {
            board: Board::new(),
            seats,
            move_count: 0,
            move_source,
            broadcaster,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn seats(&self) -> &Seats {
        &self.seats
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    pub fn current_mark(&self) -> Mark {
        if self.move_count % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn play(&mut self) -> SessionEnd {
        log!(
            "Game started: {} plays {}, {} plays {}",
            self.seats.human_name,
            self.seats.human_mark,
            self.seats.computer_name,
            self.seats.human_mark.opponent()
        );

        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_over() {
                self.announce(outcome);
                return SessionEnd::Finished(outcome);
            }

            let mark = self.current_mark();
            if self.seats.is_human(mark) {
                if !self.play_human_turn(mark) {
                    log!("{} left the game after {} moves", self.seats.human_name, self.move_count);
                    return SessionEnd::Abandoned;
                }
            } else {
                self.play_computer_turn(mark);
            }
            self.move_count += 1;
        }
    }

    /// Returns `false` when the human quits.
    fn play_human_turn(&mut self, mark: Mark) -> bool {
        loop {
            self.broadcaster.show_board(&self.board);

            let requested = self
                .move_source
                .request_move(&self.board, &self.seats.human_name, mark);

            let raw = match requested {
                HumanMove::Quit => return false,
                HumanMove::NotANumber(text) => {
                    log!("Rejected non-numeric input {:?}", text);
                    self.broadcaster.show_message("Please enter an integer...");
                    continue;
                }
                HumanMove::OutOfRange(text) => {
                    log!("Rejected position {}", text);
                    self.broadcaster.show_message(&not_on_board_message(text));
                    continue;
                }
                HumanMove::Position(raw) => raw,
            };

            let Ok(position) = usize::try_from(raw) else {
                log!("Rejected position {}", raw);
                self.broadcaster.show_message(&not_on_board_message(raw));
                continue;
            };

            match self.board.place(position, mark) {
                Ok(()) => {
                    log!("{} placed {} at {}", self.seats.human_name, mark, position);
                    return true;
                }
                Err(err) => {
                    log!("Rejected position {}: {:?}", position, err);
                    self.broadcaster.show_message(&err.to_string());
                }
            }
        }
    }

    fn play_computer_turn(&mut self, mark: Mark) {
        let ranked = rank_moves(&mut self.board, mark);
        let scores: Vec<String> = ranked
            .iter()
            .map(|(position, score)| format!("{}:{}", position, score.value()))
            .collect();
        log!("Move ranking for {}: {}", mark, scores.join(" "));

        let Some(position) = best_ranked(&ranked, mark) else {
            panic!("move selector found no move on a board that is still in progress");
        };
        if let Err(err) = self.board.place(position, mark) {
            panic!("move selector proposed an illegal move: {}", err);
        }

        log!("{} placed {} at {}", self.seats.computer_name, mark, position);
        self.broadcaster.show_message(&format!(
            "{} placed {} at {}",
            self.seats.computer_name, mark, position
        ));
    }

    fn announce(&mut self, outcome: GameOutcome) {
        self.broadcaster.show_board(&self.board);

        match outcome {
            GameOutcome::Win(mark) => {
                let winner = self.seats.name_for(mark).to_string();
                if let Some(line) = find_winning_line(&self.board) {
                    log!("{} won on line {} after {} moves", winner, line, self.move_count);
                }
                self.broadcaster.show_message(&format!("{} won!", winner));
            }
            GameOutcome::Draw => {
                log!("Game drawn after {} moves", self.move_count);
                self.broadcaster.show_message("The game was a draw!");
            }
            GameOutcome::InProgress => {}
        }
    }
}
