use super::board::Board;
use super::minimax::minimax;
use super::types::{positions, Mark, Score};

/// Minimax score of every legal move for `bot_mark`, in increasing position order.
pub fn rank_moves(board: &mut Board, bot_mark: Mark) -> Vec<(usize, Score)> {
    let mut ranked = Vec::new();
    for position in positions() {
        let Ok(mut child) = board.simulate(position, bot_mark) else {
            continue;
        };
        let score = minimax(&mut child, bot_mark.opponent());
        ranked.push((position, score));
    }
    ranked
}

/// Best position for `bot_mark`, or `None` when the board has no empty cell.
pub fn select_move(board: &mut Board, bot_mark: Mark) -> Option<usize> {
    best_ranked(&rank_moves(board, bot_mark), bot_mark)
}

/// Picks from an existing ranking. Ties go to the earliest entry: a later move
/// only replaces the current choice when its score is strictly better for
/// `bot_mark`.
pub fn best_ranked(ranked: &[(usize, Score)], bot_mark: Mark) -> Option<usize> {
    let mut best: Option<(usize, Score)> = None;

    for &(position, score) in ranked {
        let improves = match best {
            None => true,
            Some((_, best_score)) => score.is_better_for(bot_mark, best_score),
        };
        if improves {
            best = Some((position, score));
        }
    }

    best.map(|(position, _)| position)
}
