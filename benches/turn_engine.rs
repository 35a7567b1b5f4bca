use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{turn, Board, Game, Rules, SimpleRng};
use tui_2048::types::Direction;

fn mid_game_board() -> Board {
    Board::from_rows(&[
        vec![2, 2, 4, 0],
        vec![0, 8, 0, 8],
        vec![2, 0, 2, 2],
        vec![16, 0, 0, 16],
    ])
}

fn bench_apply_move(c: &mut Criterion) {
    let rules = Rules::classic();

    c.bench_function("apply_move_left_4x4", |b| {
        b.iter(|| {
            let mut board = mid_game_board();
            turn::apply_move(black_box(&mut board), Direction::Left, &rules)
        })
    });

    c.bench_function("apply_move_noop_4x4", |b| {
        let mut board = mid_game_board();
        turn::apply_move(&mut board, Direction::Left, &rules);
        b.iter(|| {
            let mut settled = board.clone();
            turn::apply_move(black_box(&mut settled), Direction::Left, &rules)
        })
    });
}

fn bench_random_empty_cell(c: &mut Criterion) {
    let board = mid_game_board();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("random_empty_cell_4x4", |b| {
        b.iter(|| board.random_empty_cell(black_box(&mut rng)))
    });
}

fn bench_full_turn(c: &mut Criterion) {
    c.bench_function("game_turn_with_spawn", |b| {
        let mut game = Game::new(Rules::classic(), 4, 4, 12345).unwrap();
        game.start();
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let direction = if flip { Direction::Left } else { Direction::Right };
            let result = game.apply_move(black_box(direction)).unwrap();
            if game.no_moves_available() {
                game.reset();
            }
            result
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_random_empty_cell,
    bench_full_turn
);
criterion_main!(benches);
