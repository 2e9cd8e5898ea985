use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::{debug_log, log};

use super::bot_controller::choose_move;
use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, GameStatus, Player};

/// Who plays O. Serialized as the same short names the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameMode {
    TwoPlayer,
    VsComputer(Difficulty),
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::VsComputer(Difficulty::Hard)
    }
}

impl FromStr for GameMode {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2p" | "two_player" => Ok(GameMode::TwoPlayer),
            other => other
                .parse::<Difficulty>()
                .map(GameMode::VsComputer)
                .map_err(|_| MoveError::UnknownMode(s.to_string())),
        }
    }
}

impl TryFrom<String> for GameMode {
    type Error = MoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameMode> for String {
    fn from(mode: GameMode) -> Self {
        mode.to_string()
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "2p"),
            GameMode::VsComputer(difficulty) => write!(f, "{}", difficulty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scoreboard {
    pub x: u32,
    pub o: u32,
}

impl Scoreboard {
    fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Player::X) => self.x += 1,
            Some(Player::O) => self.o += 1,
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Input that cannot be played right now. Nothing changed.
    Ignored,
    Continue { next: Player },
    GameOver(GameStatus),
}

/// One table of play: the board, who plays O, and the running score.
pub struct TicTacToeSession {
    state: TicTacToeGameState,
    mode: GameMode,
    scores: Scoreboard,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        log!("Starting tic-tac-toe session, mode {}, seed {}", mode, rng.seed());
        Self {
            state: TicTacToeGameState::new(),
            mode,
            scores: Scoreboard::default(),
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn scores(&self) -> Scoreboard {
        self.scores
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        log!("Mode changed from {} to {}", self.mode, mode);
        self.mode = mode;
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::VsComputer(_))
            && !self.state.status().is_over()
            && self.state.current_player() == Player::O
    }

    /// A click on `index` by whoever is to move. Illegal clicks are dropped.
    pub fn handle_human_move(&mut self, index: usize) -> TurnResult {
        if self.is_computer_turn() {
            debug_log!("Ignoring click on {} during computer turn", index);
            return TurnResult::Ignored;
        }

        let player = self.state.current_player();
        match self.state.apply_move(index, player) {
            Ok(status) => self.finish_turn(status),
            Err(e) => {
                debug_log!("Ignoring click on {}: {}", index, e);
                TurnResult::Ignored
            }
        }
    }

    pub fn play_computer_turn(&mut self) -> Result<TurnResult, MoveError> {
        let GameMode::VsComputer(difficulty) = self.mode else {
            return Ok(TurnResult::Ignored);
        };
        if self.state.status().is_over() || self.state.current_player() != Player::O {
            return Ok(TurnResult::Ignored);
        }

        let index = choose_move(self.state.board(), difficulty, &mut self.rng)?;
        let status = self.state.apply_move(index, Player::O)?;
        debug_log!("Computer ({}) played cell {}", difficulty, index);
        Ok(self.finish_turn(status))
    }

    fn finish_turn(&mut self, status: GameStatus) -> TurnResult {
        if status.is_over() {
            self.scores.record(status);
            log!(
                "Game over: {:?}, score X {} - O {}",
                status,
                self.scores.x,
                self.scores.o
            );
            TurnResult::GameOver(status)
        } else {
            TurnResult::Continue {
                next: self.state.current_player(),
            }
        }
    }

    /// Clears the board and keeps the score.
    pub fn new_game(&mut self) {
        self.state.reset();
    }

    /// Clears the board and the score.
    pub fn reset(&mut self) {
        self.scores = Scoreboard::default();
        self.state.reset();
    }
}
