use super::board::Board;
use super::types::{positions, GameOutcome, Mark, Score};
use super::win_detector::evaluate;

/// Exhaustive minimax value of `board` with `mark_to_move` on turn.
///
/// Every candidate move is played on `board` itself through a
/// [`SimulatedMove`](super::board::SimulatedMove) guard, so the board is
/// identical to its input state once this returns.
pub fn minimax(board: &mut Board, mark_to_move: Mark) -> Score {
    match evaluate(board) {
        GameOutcome::Win(winner) => return Score::for_winner(winner),
        GameOutcome::Draw => return Score::Draw,
        GameOutcome::InProgress => {}
    }

    let mut best = match mark_to_move {
        Mark::X => Score::MIN,
        Mark::O => Score::MAX,
    };

    for position in positions() {
        let Ok(mut child) = board.simulate(position, mark_to_move) else {
            continue;
        };
        let score = minimax(&mut child, mark_to_move.opponent());

        best = match mark_to_move {
            Mark::X => best.max(score),
            Mark::O => best.min(score),
        };
    }

    best
}
