use std::io::Write;
use std::time::Duration;

use tictactoe_engine::games::tictactoe::{TicTacToeSession, TurnResult};
use tictactoe_engine::{debug_log, log};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::render::render_session;

/// Drives one session from line-based input until `quit` or end of input.
pub async fn run_game_loop<R, W>(
    session: &mut TicTacToeSession,
    input: R,
    out: &mut W,
    bot_delay: Duration,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "{}", render_session(session))?;

    loop {
        if session.is_computer_turn() {
            tokio::time::sleep(bot_delay).await;
            match session.play_computer_turn() {
                Ok(_) => write!(out, "{}", render_session(session))?,
                Err(e) => {
                    log!("Computer could not move: {}", e);
                    writeln!(out, "Computer could not move: {}", e)?;
                    break;
                }
            }
            continue;
        }

        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug_log!("Input closed");
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };

        match command {
            Command::Place(index) => match session.handle_human_move(index) {
                TurnResult::Ignored if session.state().status().is_over() => {
                    writeln!(out, "The game is over, type 'new' to play again")?;
                }
                TurnResult::Ignored => {
                    writeln!(out, "Cell {} is already taken", index + 1)?;
                }
                TurnResult::Continue { .. } | TurnResult::GameOver(_) => {
                    write!(out, "{}", render_session(session))?;
                }
            },
            Command::NewGame => {
                session.new_game();
                write!(out, "{}", render_session(session))?;
            }
            Command::Reset => {
                session.reset();
                write!(out, "{}", render_session(session))?;
            }
            Command::Mode(mode) => {
                session.set_mode(mode);
                writeln!(out, "Mode set to {}", mode)?;
                write!(out, "{}", render_session(session))?;
            }
            Command::Help => writeln!(out, "{}", HELP_TEXT)?,
            Command::Quit => break,
        }
    }

    Ok(())
}
