mod board;
mod bot_controller;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{Board, SimulatedMove};
pub use bot_controller::{best_ranked, rank_moves, select_move};
pub use minimax::minimax;
pub use session::{
    GameBroadcaster, HumanMove, MarkAssignment, MoveSource, Seats, SessionEnd, TicTacToeSession,
};
pub use types::{
    not_on_board_message, positions, GameOutcome, Mark, PlaceError, Score, WinningLine,
    BOARD_SIDE, CELL_COUNT, FIRST_POSITION, LAST_POSITION,
};
pub use win_detector::{evaluate, find_winning_line, LINES};
