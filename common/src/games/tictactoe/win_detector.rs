use super::board::Board;
use super::types::{GameOutcome, WinningLine, BOARD_SIDE};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; BOARD_SIDE]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| check_line(board, line))
}

fn check_line(board: &Board, line: [usize; BOARD_SIDE]) -> Option<WinningLine> {
    let [first, rest @ ..] = line;
    let mark = board.get(first)?;
    if rest.iter().all(|&position| board.get(position) == Some(mark)) {
        Some(WinningLine::new(mark, line))
    } else {
        None
    }
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(line) = find_winning_line(board) {
        return GameOutcome::Win(line.mark);
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{positions, Mark};

    fn board(marks: &[(usize, Mark)]) -> Board {
        Board::from_marks(marks).unwrap()
    }

    #[test]
    fn test_empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameOutcome::InProgress);
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_top_row_wins_for_x() {
        let board = board(&[(1, Mark::X), (4, Mark::O), (2, Mark::X), (5, Mark::O), (3, Mark::X)]);
        assert_eq!(evaluate(&board), GameOutcome::Win(Mark::X));
        assert_eq!(
            find_winning_line(&board),
            Some(WinningLine::new(Mark::X, [1, 2, 3]))
        );
    }

    #[test]
    fn test_column_and_diagonals_are_detected() {
        let column = board(&[(2, Mark::O), (5, Mark::O), (8, Mark::O)]);
        assert_eq!(evaluate(&column), GameOutcome::Win(Mark::O));

        let main_diagonal = board(&[(1, Mark::X), (5, Mark::X), (9, Mark::X)]);
        assert_eq!(evaluate(&main_diagonal), GameOutcome::Win(Mark::X));

        let anti_diagonal = board(&[(3, Mark::O), (5, Mark::O), (7, Mark::O)]);
        assert_eq!(
            find_winning_line(&anti_diagonal),
            Some(WinningLine::new(Mark::O, [3, 5, 7]))
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board = board(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::X),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ]);
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // X O X
        // O X O
        // O X X
        let board = board(&[
            (1, Mark::X),
            (2, Mark::O),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::X),
            (9, Mark::X),
        ]);
        assert_eq!(evaluate(&board), GameOutcome::Win(Mark::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board(&[(1, Mark::X), (2, Mark::O), (3, Mark::X)]);
        assert_eq!(evaluate(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_boards_without_triple_never_report_win() {
        // every subset of cells filled in alternating order, skipping boards that contain a line
        for mask in 0u32..(1 << 9) {
            let mut board = Board::new();
            let mut mark = Mark::X;
            for position in positions() {
                if mask & (1 << (position - 1)) != 0 {
                    board.place(position, mark).unwrap();
                    mark = mark.opponent();
                }
            }

            let has_triple = LINES.iter().any(|line| {
                let first = board.get(line[0]);
                first.is_some() && line.iter().all(|&p| board.get(p) == first)
            });
            if !has_triple {
                assert!(!matches!(evaluate(&board), GameOutcome::Win(_)));
            }
        }
    }

    #[test]
    fn test_evaluate_is_stable_under_clear_and_replay() {
        let moves = [(5, Mark::X), (1, Mark::O), (9, Mark::X), (3, Mark::O), (2, Mark::X)];
        let mut board = Board::from_marks(&moves).unwrap();
        let before = evaluate(&board);

        for &(position, _) in &moves {
            board.clear(position);
        }
        assert_eq!(board, Board::new());
        for &(position, mark) in &moves {
            board.place(position, mark).unwrap();
        }

        assert_eq!(evaluate(&board), before);
    }
}
