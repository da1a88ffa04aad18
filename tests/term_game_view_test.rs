use tui_flight::core::{Collectible, FlightGame, MemoryStore};
use tui_flight::term::{encode_frame, FrameBuffer, GameView, Viewport};
use tui_flight::types::Pitch;

fn game() -> FlightGame {
    FlightGame::new(40, 20, 11, Box::new(MemoryStore::new(0)))
}

#[test]
fn term_view_draws_plane_at_third_of_width() {
    let snap = game().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));

    assert_eq!(snap.plane_x, 13);
    assert_eq!(fb.row_text(10).get(13..16), Some(">-o"));
}

#[test]
fn term_view_ground_matches_terrain_heights() {
    let g = game();
    let snap = g.snapshot();
    let fb = GameView::default().with_hud(false).render(&snap, Viewport::new(40, 20));

    for (x, h) in g.terrain().heights().enumerate() {
        let x = x as u16;
        for depth in 0..h {
            assert_eq!(fb.get(x, 19 - depth).unwrap().ch, '#', "col {x} depth {depth}");
        }
        assert_ne!(fb.get(x, 19 - h).unwrap().ch, '#', "col {x} above ground");
    }
}

#[test]
fn term_view_shows_pickup_flash_then_clears() {
    let mut g = FlightGame::new(40, 40, 11, Box::new(MemoryStore::new(0)));
    g.collectibles_mut().insert(Collectible::new(14, 20));
    g.step(Pitch::Neutral);
    assert_eq!(g.last_collect_tick(), Some(1));

    let view = GameView::default();
    let snap = g.snapshot();
    let fb = view.render(&snap, Viewport::new(40, 40));
    assert!(fb.row_text(19).contains("+50 BONUS!"));
    assert!(fb.row_text(5).contains("Bonus: 1"));

    // Stay clear of the ground while the flash times out.
    for _ in 0..20 {
        g.step(Pitch::Up);
    }
    let fb = view.render(&g.snapshot(), Viewport::new(40, 40));
    assert!((0..40).all(|y| !fb.row_text(y).contains("BONUS!")));
}

#[test]
fn term_view_crash_banner_after_crash() {
    let mut g = game();
    while !g.crashed() {
        g.step(Pitch::Neutral);
    }
    let snap = g.snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(40, 20));

    assert!(fb.row_text(9).contains("*** CRASHED! ***"));
    assert!(fb
        .row_text(10)
        .contains(&format!("Final Score: {} - NEW HIGH SCORE!", snap.score)));
    assert!(fb.row_text(11).contains("Press Q to quit"));
}

#[test]
fn term_view_diff_after_one_tick_is_small() {
    let mut g = game();
    let view = GameView::default();
    let vp = Viewport::new(40, 20);

    let mut prev = FrameBuffer::new(40, 20);
    view.render_into(&g.snapshot(), vp, &mut prev);
    g.step(Pitch::Neutral);
    let mut next = FrameBuffer::new(40, 20);
    view.render_into(&g.snapshot(), vp, &mut next);

    let mut full = Vec::new();
    encode_frame(None, &next, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_frame(Some(&prev), &next, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
