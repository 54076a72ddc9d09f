use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::tictactoe::{
    search, Board, FirstPlayerMode, GameStatus, Mark, Roles, TicTacToeGameState,
    TicTacToeSessionSettings, CELL_COUNT,
};

fn computer_o() -> Roles {
    Roles { maximizing: Mark::O, minimizing: Mark::X }
}

fn bench_search_empty_board() {
    let mut cells = [Mark::Empty; CELL_COUNT];
    black_box(search(&mut cells, Mark::O, computer_o()));
}

fn bench_search_after_center_opening() {
    let mut board = Board::new();
    board.update(4, Mark::X);
    let mut cells = *board.get();
    black_box(search(&mut cells, Mark::O, computer_o()));
}

fn bench_computer_against_itself() {
    let settings = TicTacToeSessionSettings {
        first_player_mode: FirstPlayerMode::Computer,
        ..Default::default()
    };
    let Ok(mut state) = TicTacToeGameState::new(&settings) else {
        return;
    };

    while state.status() == GameStatus::InProgress {
        if state.is_computer_turn() {
            let _ = state.computer_move();
        } else {
            let mut cells = *state.board().get();
            let reply = search(&mut cells, state.human().mark(), state.roles()).index;
            match reply {
                Some(index) => {
                    let _ = state.place_mark(index);
                }
                None => break,
            }
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_search_empty_board)
    });

    group.bench_function("single_move_after_center", |b| {
        b.iter(bench_search_after_center_opening)
    });

    group.bench_function("full_game", |b| {
        b.iter(bench_computer_against_itself)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
