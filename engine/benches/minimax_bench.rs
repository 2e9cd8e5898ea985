use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{
    Board, Difficulty, Player, TicTacToeGameState, choose_move, minimax_score, select_best_move,
};

fn bench_best_move(board: &Board) {
    let _ = select_best_move(black_box(board));
}

fn bench_full_tree_from_empty_board() {
    black_box(minimax_score(black_box(&Board::new()), false));
}

fn bench_computer_vs_random_game() {
    let mut rng = SessionRng::new(42);
    let mut state = TicTacToeGameState::new();
    while !state.status().is_over() {
        let player = state.current_player();
        let difficulty = match player {
            Player::X => Difficulty::Easy,
            Player::O => Difficulty::Hard,
        };
        let Ok(index) = choose_move(state.board(), difficulty, &mut rng) else {
            break;
        };
        if state.apply_move(index, player).is_err() {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    let after_opening: Board = "X.. ... ...".parse().unwrap();
    group.bench_function("best_move_after_opening", |b| {
        b.iter(|| bench_best_move(&after_opening))
    });

    let mid_game: Board = "X.. .O. ..X".parse().unwrap();
    group.bench_function("best_move_mid_game", |b| b.iter(|| bench_best_move(&mid_game)));

    group.bench_function("full_tree_empty_board", |b| {
        b.iter(bench_full_tree_from_empty_board)
    });

    group.bench_function("computer_vs_random_game", |b| {
        b.iter(bench_computer_vs_random_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
