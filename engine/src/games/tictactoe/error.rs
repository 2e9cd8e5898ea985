use thiserror::Error;

use super::types::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid move: {0}")]
    InvalidMove(InvalidMoveReason),

    #[error("No move available: the board is full")]
    NoMoveAvailable,

    #[error("Invalid board: {0}")]
    InvalidBoard(String),

    #[error("Unknown difficulty '{0}', expected easy, medium or hard")]
    UnknownDifficulty(String),

    #[error("Unknown game mode '{0}', expected 2p, easy, medium or hard")]
    UnknownMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMoveReason {
    #[error("cell {index} is out of bounds")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already marked")]
    CellOccupied { index: usize },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotYourTurn { expected: Player, actual: Player },

    #[error("game is already over")]
    GameOver,
}

impl From<InvalidMoveReason> for MoveError {
    fn from(reason: InvalidMoveReason) -> Self {
        MoveError::InvalidMove(reason)
    }
}
