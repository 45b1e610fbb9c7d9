use std::fmt;
use std::ops::RangeInclusive;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;
pub const FIRST_POSITION: usize = 1;
pub const LAST_POSITION: usize = CELL_COUNT;

/// All positions in increasing order.
pub fn positions() -> RangeInclusive<usize> {
    FIRST_POSITION..=LAST_POSITION
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// Game-theoretic value of a position under optimal play. Declaration order
/// gives the ordering, so X maximizes and O minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    OWins,
    Draw,
    XWins,
}

impl Score {
    pub const MIN: Score = Score::OWins;
    pub const MAX: Score = Score::XWins;

    pub fn for_winner(mark: Mark) -> Score {
        match mark {
            Mark::X => Score::XWins,
            Mark::O => Score::OWins,
        }
    }

    pub fn value(self) -> i32 {
        match self {
            Score::OWins => -1,
            Score::Draw => 0,
            Score::XWins => 1,
        }
    }

    /// Whether `self` is strictly better than `other` for the player holding `mark`.
    pub fn is_better_for(self, mark: Mark, other: Score) -> bool {
        match mark {
            Mark::X => self > other,
            Mark::O => self < other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub positions: [usize; BOARD_SIDE],
}

impl WinningLine {
    pub fn new(mark: Mark, positions: [usize; BOARD_SIDE]) -> Self {
        Self { mark, positions }
    }
}

impl fmt::Display for WinningLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.positions;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    InvalidPosition(usize),
    PositionTaken(usize),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::InvalidPosition(position) => {
                write!(f, "{}", not_on_board_message(position))
            }
            PlaceError::PositionTaken(position) => {
                write!(f, "Position {} is taken, please try again", position)
            }
        }
    }
}

impl std::error::Error for PlaceError {}

/// Also used for raw input that cannot even be a position, such as negative numbers.
pub fn not_on_board_message(position: impl fmt::Display) -> String {
    format!(
        "Position {} is not on the board!\nPositions are represented by integers from {} to {} inclusive.",
        position, FIRST_POSITION, LAST_POSITION
    )
}
