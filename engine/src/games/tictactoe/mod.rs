mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT, WINNING_LINES};
pub use bot_controller::{
    BOT_MARK, DRAW_SCORE, HUMAN_MARK, LOSS_SCORE, WIN_SCORE, choose_move, minimax_score,
    select_best_move,
};
pub use error::{InvalidMoveReason, MoveError};
pub use game_state::TicTacToeGameState;
pub use session::{GameMode, Scoreboard, TicTacToeSession, TurnResult};
pub use types::{Difficulty, GameStatus, Mark, Player, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate_outcome};
