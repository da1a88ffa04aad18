use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flight::core::{FlightGame, FlightSnapshot, MemoryStore};
use tui_flight::term::{encode_frame, FrameBuffer, GameView, Viewport};
use tui_flight::types::Pitch;

fn airborne_game() -> FlightGame {
    FlightGame::new(120, 40, 12345, Box::new(MemoryStore::new(0)))
}

fn bench_tick(c: &mut Criterion) {
    let mut game = airborne_game();

    c.bench_function("flight_tick", |b| {
        b.iter(|| {
            // Alternate pitch so the plane hovers instead of crashing.
            let pitch = if game.plane().altitude() > 15.0 {
                Pitch::Up
            } else {
                Pitch::Neutral
            };
            black_box(game.step(black_box(pitch)));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = airborne_game();
    let mut snap = FlightSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = airborne_game();
    let snap = game.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(120, 40);

    c.bench_function("render_into_120x40", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

fn bench_diff(c: &mut Criterion) {
    let mut game = airborne_game();
    let view = GameView::default();
    let vp = Viewport::new(120, 40);
    let prev = view.render(&game.snapshot(), vp);
    game.step(Pitch::Neutral);
    let next = view.render(&game.snapshot(), vp);
    let mut out = Vec::with_capacity(16 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            let _ = encode_frame(Some(black_box(&prev)), black_box(&next), &mut out);
        })
    });
}

criterion_group!(benches, bench_tick, bench_snapshot, bench_render, bench_diff);
criterion_main!(benches);
