use tictactoe_engine::games::tictactoe::{GameStatus, TicTacToeSession};

pub fn result_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::XWon => Some("Player X Wins!"),
        GameStatus::OWon => Some("Player O Wins!"),
        GameStatus::Draw => Some("It's a Tie!"),
        GameStatus::InProgress => None,
    }
}

pub fn render_session(session: &TicTacToeSession) -> String {
    let state = session.state();
    let scores = session.scores();

    let mut out = String::new();
    out.push_str(&state.board().to_string());
    out.push_str(&format!(
        "Player X: {}   Player O: {}   Mode: {}\n",
        scores.x,
        scores.o,
        session.mode()
    ));

    match result_text(state.status()) {
        Some(text) => {
            out.push_str(text);
            out.push_str("  (type 'new' to play again)\n");
        }
        None => out.push_str(&format!("Current player: {}\n", state.current_player())),
    }

    out
}
