use std::fmt;
use std::ops::{Deref, DerefMut};

use super::types::{
    positions, Mark, PlaceError, BOARD_SIDE, CELL_COUNT, FIRST_POSITION, LAST_POSITION,
};

/// 3x3 grid addressed by positions 1..=9 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `(position, mark)` pairs, rejecting duplicates and
    /// off-board positions the same way [`Board::place`] does.
    pub fn from_marks(marks: &[(usize, Mark)]) -> Result<Self, PlaceError> {
        let mut board = Self::new();
        for &(position, mark) in marks {
            board.place(position, mark)?;
        }
        Ok(board)
    }

    pub fn is_on_board(position: usize) -> bool {
        (FIRST_POSITION..=LAST_POSITION).contains(&position)
    }

    pub fn is_empty(&self, position: usize) -> bool {
        Self::is_on_board(position) && self.cells[position - 1].is_none()
    }

    pub fn get(&self, position: usize) -> Option<Mark> {
        if !Self::is_on_board(position) {
            return None;
        }
        self.cells[position - 1]
    }

    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), PlaceError> {
        if !Self::is_on_board(position) {
            return Err(PlaceError::InvalidPosition(position));
        }
        if !self.is_empty(position) {
            return Err(PlaceError::PositionTaken(position));
        }

        self.cells[position - 1] = Some(mark);
        Ok(())
    }

    /// No-op for off-board positions.
    pub fn clear(&mut self, position: usize) {
        if Self::is_on_board(position) {
            self.cells[position - 1] = None;
        }
    }

    /// Places `mark` for the lifetime of the returned guard. The cell is
    /// cleared again when the guard is dropped.
    pub fn simulate(
        &mut self,
        position: usize,
        mark: Mark,
    ) -> Result<SimulatedMove<'_>, PlaceError> {
        self.place(position, mark)?;
        Ok(SimulatedMove {
            board: self,
            position,
        })
    }

    pub fn empty_positions(&self) -> impl Iterator<Item = usize> + '_ {
        positions().filter(|&position| self.is_empty(position))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn mark_count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let cells: Vec<String> = (0..BOARD_SIDE)
                .map(|col| {
                    let position = row * BOARD_SIDE + col + 1;
                    match self.get(position) {
                        Some(mark) => mark.to_string(),
                        None => position.to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" | "))?;
        }
        Ok(())
    }
}

pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    position: usize,
}

impl SimulatedMove<'_> {
    pub fn position(&self) -> usize {
        self.position
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.position);
    }
}
