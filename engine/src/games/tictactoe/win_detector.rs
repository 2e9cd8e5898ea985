use super::board::{Board, WINNING_LINES};
use super::types::{GameStatus, Mark, Player, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if cells[a] != Mark::Empty && cells[a] == cells[b] && cells[b] == cells[c] {
            return cells[a]
                .player()
                .map(|player| WinningLine::new(player, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// Pure outcome of a board. A win takes precedence over a full board.
pub fn evaluate_outcome(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return GameStatus::won_by(winner);
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_row_win() {
        let b = board("XXX OO. ...");
        assert_eq!(evaluate_outcome(&b), GameStatus::XWon);
        assert_eq!(
            check_win_with_line(&b),
            Some(WinningLine::new(Player::X, [0, 1, 2]))
        );
    }

    #[test]
    fn test_column_win() {
        let b = board("OX. OX. O.X");
        assert_eq!(evaluate_outcome(&b), GameStatus::OWon);
        assert_eq!(check_win_with_line(&b).map(|l| l.cells), Some([0, 3, 6]));
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(
            check_win_with_line(&board("XO. OX. ..X")).map(|l| l.cells),
            Some([0, 4, 8])
        );
        assert_eq!(
            check_win_with_line(&board("OOX .X. X..")).map(|l| l.cells),
            Some([2, 4, 6])
        );
    }

    #[test]
    fn test_draw() {
        assert_eq!(evaluate_outcome(&board("XOX XOO OXX")), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        assert_eq!(evaluate_outcome(&board("XOX OXO OXX")), GameStatus::XWon);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let b = board("XO. .X. O..");
        let first = evaluate_outcome(&b);
        assert_eq!(first, evaluate_outcome(&b));
        assert_eq!(first, GameStatus::InProgress);
    }

    #[test]
    fn test_reachable_boards_never_report_two_winners() {
        fn walk(b: Board, seen: &mut usize) {
            *seen += 1;
            let x_lines = WINNING_LINES
                .iter()
                .filter(|line| line.iter().all(|&i| b.get(i) == Some(Mark::X)))
                .count();
            let o_lines = WINNING_LINES
                .iter()
                .filter(|line| line.iter().all(|&i| b.get(i) == Some(Mark::O)))
                .count();
            assert!(x_lines == 0 || o_lines == 0, "both players won on\n{}", b);

            let status = evaluate_outcome(&b);
            match status {
                GameStatus::XWon => assert!(x_lines > 0),
                GameStatus::OWon => assert!(o_lines > 0),
                GameStatus::Draw => assert!(b.is_full() && x_lines == 0 && o_lines == 0),
                GameStatus::InProgress => assert!(!b.is_full() && x_lines == 0 && o_lines == 0),
            }
            if status.is_over() {
                return;
            }

            let mark = b.next_player().mark();
            for index in b.available_moves() {
                walk(b.with_mark(index, mark), seen);
            }
        }

        let mut seen = 0;
        walk(Board::new(), &mut seen);
        // Number of nodes in the full tic-tac-toe game tree.
        assert_eq!(seen, 549_946);
    }
}
