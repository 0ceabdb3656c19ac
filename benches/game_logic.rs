use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stackfall::core::{is_legal, spawn_orientation, Board, GameSnapshot, GameState};
use stackfall::term::{FrameBuffer, GameView, Hud, Viewport};
use stackfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if !state.tick() && state.is_game_over() {
                state.reset_session();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for row in 16..20 {
                for col in 0..10 {
                    board.set(row, col, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let board = Board::default();
    let t = spawn_orientation(PieceKind::T);

    c.bench_function("is_legal", |b| {
        b.iter(|| is_legal(black_box(&t), black_box(10), black_box(4), &board))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop_and_spawn", |b| {
        b.iter(|| {
            state.apply_action(GameAction::HardDrop);
            if state.is_game_over() {
                state.reset_session();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, Hud::default(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_hard_drop,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
