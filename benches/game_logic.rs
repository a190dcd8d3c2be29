use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snake_evolution::core::question::{generate, generate_general};
use snake_evolution::core::{Board, Session, SessionSnapshot, SimpleRng};
use snake_evolution::term::{FrameBuffer, SessionView, Translations, Viewport};
use snake_evolution::types::{Cell, Direction, Intent, Subject};

fn long_snake() -> Board {
    // Serpentine through the top rows so the body never blocks the head.
    let mut cells = Vec::new();
    for y in 0..6i8 {
        for i in 0..38i8 {
            let x = if y % 2 == 0 { 38 - i } else { i + 1 };
            cells.push(Cell::new(x, y + 2));
        }
    }
    Board::with_snake(&cells, Direction::Right, Cell::new(0, 29)).unwrap_or_else(|| {
        Board::new(&mut SimpleRng::new(1), 0)
    })
}

fn bench_board_tick(c: &mut Criterion) {
    c.bench_function("board_tick_long_snake", |b| {
        let mut board = long_snake();
        let mut now = 0u64;
        b.iter(|| {
            now += 200;
            let result = board.tick(black_box(now), None, 200);
            if result.collided() {
                board = long_snake();
                now = 0;
            }
        })
    });
}

fn bench_spawn_food(c: &mut Criterion) {
    let mut board = long_snake();
    let mut rng = SimpleRng::new(12345);
    c.bench_function("spawn_food", |b| {
        b.iter(|| {
            board.spawn_food(black_box(&mut rng));
        })
    });
}

fn bench_question_generation(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("generate_math_advanced", |b| {
        b.iter(|| generate(Subject::Math, black_box(8), &mut rng))
    });
    c.bench_function("generate_general", |b| {
        b.iter(|| generate_general(black_box(2), &mut rng))
    });
}

fn bench_session_step(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.step(0, &[Intent::Start]);
    let turns = [Intent::MoveDown, Intent::MoveLeft, Intent::MoveUp, Intent::MoveRight];
    let mut i = 0usize;

    c.bench_function("session_step_100ms", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            session.step(black_box(100), &[turns[i % turns.len()]]);
            if session.mode_tag() != snake_evolution::types::ModeTag::Playing {
                session.restart();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let Ok(text) = Translations::embedded() else {
        return;
    };
    let mut session = Session::new(12345);
    session.step(0, &[Intent::Start]);
    let view = SessionView::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("snapshot_and_render_120x40", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, &text, Viewport::new(120, 40), &mut fb);
            black_box(fb.cells().len())
        })
    });
}

criterion_group!(
    benches,
    bench_board_tick,
    bench_spawn_food,
    bench_question_generation,
    bench_session_step,
    bench_render
);
criterion_main!(benches);
