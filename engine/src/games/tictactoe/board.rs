use std::fmt;
use std::str::FromStr;

use super::error::MoveError;
use super::types::{Mark, Player};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Every line that wins the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 3x3 grid indexed 0..9 in row-major order.
///
/// Outside this crate a board can only come from [`Board::new`] or parsing,
/// and parsing rejects mark counts no game can reach. Placements go through
/// `TicTacToeGameState::apply_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Player whose turn it is judging by the marks alone. X always moves first.
    pub fn next_player(&self) -> Player {
        if self.count(Mark::X) == self.count(Mark::O) {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Copy of this board with `mark` written at `index`. The receiver is untouched.
    ///
    /// Callers place on empty cells only; the search also uses it for O on boards
    /// where the counts say X is next.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Board {
        debug_assert!(self.is_empty_at(index), "cell {} is not empty", index);
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

impl FromStr for Board {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Mark::Empty; CELL_COUNT];
        let mut filled = 0;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if filled == CELL_COUNT {
                return Err(MoveError::InvalidBoard(format!(
                    "expected {} cells, got more",
                    CELL_COUNT
                )));
            }
            cells[filled] = Mark::from_char(c)
                .ok_or_else(|| MoveError::InvalidBoard(format!("unexpected character '{}'", c)))?;
            filled += 1;
        }

        if filled != CELL_COUNT {
            return Err(MoveError::InvalidBoard(format!(
                "expected {} cells, got {}",
                CELL_COUNT, filled
            )));
        }

        let board = Board { cells };
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        if o_count != x_count && o_count + 1 != x_count {
            return Err(MoveError::InvalidBoard(format!(
                "{} X marks and {} O marks cannot occur in a game",
                x_count, o_count
            )));
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, &cell)| match cell {
                    Mark::Empty => format!(" {} ", row_index * BOARD_SIZE + col + 1),
                    mark => format!(" {} ", mark.to_char()),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}
