//! GameView: maps a `core::FlightSnapshot` into draw commands.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Draw order per frame: ground, collectibles, plane, HUD, overlays. Later
//! layers overwrite earlier ones (the control legend sits on top of the ground).

use crate::core::FlightSnapshot;
use crate::fb::{Canvas, CellStyle, FrameBuffer, Rgb};
use crate::types::COLLECT_FLASH_TICKS;

pub const GROUND_GLYPH: char = '#';
pub const COLLECTIBLE_GLYPH: char = '*';
pub const PLANE_GLYPH: &str = ">-o";
pub const CRASHED_GLYPH: &str = "X*X";
pub const CONTROLS_LEGEND: &str = "W=Up S=Down Q=Quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy)]
struct Palette {
    ground: CellStyle,
    collectible: CellStyle,
    plane: CellStyle,
    wreck: CellStyle,
    hud: CellStyle,
    flash: CellStyle,
    banner: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ground: CellStyle::fg(Rgb::new(110, 170, 70)),
            collectible: CellStyle::fg(Rgb::new(245, 200, 66)).bold(),
            plane: CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
            wreck: CellStyle::fg(Rgb::new(230, 70, 50)).bold(),
            hud: CellStyle::default(),
            flash: CellStyle::fg(Rgb::new(245, 200, 66)).bold(),
            banner: CellStyle::fg(Rgb::new(255, 255, 255)).bold(),
        }
    }
}

/// A lightweight terminal renderer for the flight game.
#[derive(Debug, Clone)]
pub struct GameView {
    palette: Palette,
    show_hud: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView {
    pub fn new() -> Self {
        Self {
            palette: Palette::default(),
            show_hud: true,
        }
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &FlightSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        self.draw(snap, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &FlightSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Emit the full draw sequence for one frame onto any canvas.
    pub fn draw<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        canvas.clear();
        self.draw_ground(snap, canvas);
        self.draw_collectibles(snap, canvas);
        self.draw_plane(snap, canvas);
        if self.show_hud {
            self.draw_hud(snap, canvas);
        }
        self.draw_overlays(snap, canvas);
    }

    fn draw_ground<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        let bottom = snap.screen_height as i32 - 1;
        for (x, &h) in snap.terrain.iter().enumerate() {
            for y in 0..h as i32 {
                canvas.draw_char(bottom - y, x as i32, GROUND_GLYPH, self.palette.ground);
            }
        }
    }

    fn draw_collectibles<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        for c in &snap.collectibles {
            canvas.draw_char(c.y, c.x, COLLECTIBLE_GLYPH, self.palette.collectible);
        }
    }

    fn draw_plane<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        let (glyph, style) = if snap.crashed() {
            (CRASHED_GLYPH, self.palette.wreck)
        } else {
            (PLANE_GLYPH, self.palette.plane)
        };
        canvas.draw_text(snap.plane_y, snap.plane_x, glyph, style);
    }

    fn draw_hud<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        let style = self.palette.hud;
        let lines = [
            format!("Altitude: {:3}", snap.display_altitude as i32),
            format!("Velocity: {:5.1}", snap.velocity),
            format!("Distance: {}", snap.distance),
            format!("Time: {:.1}s", snap.time_survived_secs),
            format!("Bonus: {}", snap.collectible_count),
            format!("Score: {}", snap.score),
            format!("High Score: {}", snap.high_score),
        ];
        for (i, line) in lines.iter().enumerate() {
            canvas.draw_text(1 + i as i32, 2, line, style);
        }
        canvas.draw_text(snap.screen_height as i32 - 2, 2, CONTROLS_LEGEND, style);
    }

    fn draw_overlays<C: Canvas + ?Sized>(&self, snap: &FlightSnapshot, canvas: &mut C) {
        if !snap.crashed() {
            if snap.collect_flash_active(COLLECT_FLASH_TICKS) {
                let text = format!("+{} BONUS!", snap.last_collect_points);
                canvas.draw_text(snap.plane_y - 1, snap.plane_x, &text, self.palette.flash);
            }
            return;
        }

        let mid = snap.screen_height as i32 / 2;
        let width = snap.screen_width as i32;
        let style = self.palette.banner;

        draw_centered(canvas, mid - 1, width, "*** CRASHED! ***", style);

        let mut summary = format!("Final Score: {}", snap.score);
        if snap.reached_high_score() {
            summary.push_str(" - NEW HIGH SCORE!");
        }
        draw_centered(canvas, mid, width, &summary, style);
        draw_centered(canvas, mid + 1, width, "Press Q to quit", self.palette.hud);
    }
}

fn draw_centered<C: Canvas + ?Sized>(
    canvas: &mut C,
    row: i32,
    width: i32,
    text: &str,
    style: CellStyle,
) {
    let len = text.chars().count() as i32;
    let col = ((width - len) / 2).max(0);
    canvas.draw_text(row, col, text, style);
}
