use super::board::{Board, CELL_COUNT};
use super::error::{InvalidMoveReason, MoveError};
use super::types::{GameStatus, Mark, Player, WinningLine};
use super::win_detector::{check_win_with_line, evaluate_outcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Resumes a game from an arbitrary position. The side to move is taken from the mark counts.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            current_player: board.next_player(),
            status: evaluate_outcome(&board),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn mark_at(&self, index: usize) -> Option<Mark> {
        self.board.get(index)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Places `player`'s mark at `index` and hands the turn over.
    ///
    /// Every precondition is checked before the board is touched, so a rejected
    /// move leaves the state exactly as it was.
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(InvalidMoveReason::GameOver.into());
        }

        if index >= CELL_COUNT {
            return Err(InvalidMoveReason::OutOfBounds { index }.into());
        }

        if player != self.current_player {
            return Err(InvalidMoveReason::NotYourTurn {
                expected: self.current_player,
                actual: player,
            }
            .into());
        }

        if !self.board.is_empty_at(index) {
            return Err(InvalidMoveReason::CellOccupied { index }.into());
        }

        self.board = self.board.with_mark(index, player.mark());
        self.last_move = Some(index);
        self.current_player = player.opponent();
        self.status = evaluate_outcome(&self.board);

        Ok(self.status)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
