use tictactoe_engine::games::tictactoe::{CELL_COUNT, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell index.
    Place(usize),
    NewGame,
    Reset,
    Mode(GameMode),
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  1-9            place a mark (cells are numbered left to right, top to bottom)
  new            start a new game, keep the score
  reset          start a new game and clear the score
  mode <m>       switch mode: 2p, easy, medium or hard
  help           show this help
  quit           leave";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command, type 'help' for the list of commands".to_string());
    };

    if let Ok(cell) = head.parse::<usize>() {
        if cell == 0 || cell > CELL_COUNT {
            return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
        }
        return Ok(Command::Place(cell - 1));
    }

    match head.to_ascii_lowercase().as_str() {
        "new" | "n" => Ok(Command::NewGame),
        "reset" | "r" => Ok(Command::Reset),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "mode" | "m" => {
            let value = parts
                .next()
                .ok_or_else(|| "Usage: mode <2p|easy|medium|hard>".to_string())?;
            value
                .parse::<GameMode>()
                .map(Command::Mode)
                .map_err(|e| e.to_string())
        }
        other => Err(format!("Unknown command '{}', type 'help'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::Difficulty;

    #[test]
    fn test_parse_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(Command::Place(0)));
        assert_eq!(parse_command(" 9 "), Ok(Command::Place(8)));
    }

    #[test]
    fn test_parse_cell_out_of_range() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
    }

    #[test]
    fn test_parse_words() {
        assert_eq!(parse_command("new"), Ok(Command::NewGame));
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("help"), Ok(Command::Help));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_command("mode 2p"), Ok(Command::Mode(GameMode::TwoPlayer)));
        assert_eq!(
            parse_command("mode medium"),
            Ok(Command::Mode(GameMode::VsComputer(Difficulty::Medium)))
        );
        assert!(parse_command("mode").is_err());
        assert!(parse_command("mode nightmare").is_err());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_command("").is_err());
        assert!(parse_command("castle").is_err());
    }
}
