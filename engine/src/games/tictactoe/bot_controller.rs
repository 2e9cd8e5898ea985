use crate::debug_log;
use crate::games::SessionRng;

use super::board::Board;
use super::error::MoveError;
use super::types::{Difficulty, GameStatus, Mark};
use super::win_detector::evaluate_outcome;

/// Mark played by the computer. O maximizes the score, X minimizes it.
pub const BOT_MARK: Mark = Mark::O;
pub const HUMAN_MARK: Mark = Mark::X;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    match difficulty {
        Difficulty::Easy => choose_random_move(board, rng),
        // Medium plays exactly like hard.
        Difficulty::Medium | Difficulty::Hard => select_best_move(board),
    }
}

fn choose_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(MoveError::NoMoveAvailable);
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Best cell for O. Ties keep the lowest index.
pub fn select_best_move(board: &Board) -> Result<usize, MoveError> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        let score = minimax_score(&board.with_mark(index, BOT_MARK), false);
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    let best_move = best_move.ok_or(MoveError::NoMoveAvailable)?;
    debug_log!("Bot picked cell {} with score {}", best_move, best_score);
    Ok(best_move)
}

/// Exhaustive minimax value of `board` from O's point of view.
///
/// Terminal boards score -10, 0 or 10 regardless of how deep they are, so a
/// quick win and a slow win look the same to the search.
pub fn minimax_score(board: &Board, is_maximizing: bool) -> i32 {
    match evaluate_outcome(board) {
        GameStatus::XWon => return LOSS_SCORE,
        GameStatus::OWon => return WIN_SCORE,
        GameStatus::Draw => return DRAW_SCORE,
        GameStatus::InProgress => {}
    }

    let mark = if is_maximizing { BOT_MARK } else { HUMAN_MARK };
    let scores = board
        .available_moves()
        .into_iter()
        .map(|index| minimax_score(&board.with_mark(index, mark), !is_maximizing));

    // InProgress guarantees at least one empty cell.
    if is_maximizing {
        scores.max().unwrap_or(DRAW_SCORE)
    } else {
        scores.min().unwrap_or(DRAW_SCORE)
    }
}
