//! Puts framebuffers on the real terminal.
//!
//! The renderer keeps a copy of what is currently on screen. Each frame is
//! compared row by row against it and only the spans that differ are
//! rewritten; the first frame, and any frame of a different size, clears the
//! screen and writes every row.

use std::io::{self, Stdout, Write};
use std::ops::Range;

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::game_view::Viewport;

pub struct TerminalRenderer {
    out: Stdout,
    screen: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            screen: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Current terminal size as a viewport, falling back to 80x24.
    pub fn viewport() -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }

    /// Raw mode on the alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, DisableLineWrap)?;
        self.screen = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Write `frame` to the terminal.
    ///
    /// `frame` is swapped with the previous on-screen frame, so afterwards it
    /// holds stale content; callers redraw it from scratch every tick anyway.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.screen.as_ref(), frame, &mut self.bytes)?;
        if !self.bytes.is_empty() {
            self.out.write_all(&self.bytes)?;
            self.out.flush()?;
        }

        if let Some(screen) = self.screen.as_mut() {
            std::mem::swap(screen, frame);
        } else {
            self.screen = Some(frame.clone());
        }
        Ok(())
    }
}

/// Encode the bytes that turn `prev` (what is on screen) into `next`.
///
/// Nothing is emitted when the frames are equal.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        queue!(out, Clear(ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        match prev {
            Some(prev) => {
                for span in changed_spans(prev.row(y), row) {
                    pen.write_span(out, span.start, y, &row[span])?;
                }
            }
            None => pen.write_span(out, 0, y, row)?,
        }
    }

    if pen.style.is_some() {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Remembers the last style sent so a run of equal cells shares one escape.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn write_span(&mut self, out: &mut Vec<u8>, x: usize, y: u16, cells: &[Cell]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        // x is a column of a u16-wide row.
        queue!(out, MoveTo(x as u16, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                let fg = cell.style.fg;
                let weight = if cell.style.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                };
                queue!(
                    out,
                    SetForegroundColor(Color::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b
                    }),
                    SetAttribute(weight)
                )?;
                self.style = Some(cell.style);
            }
            queue!(out, Print(cell.ch))?;
        }
        Ok(())
    }
}

/// Column ranges where `before` and `after` differ, adjacent cells merged.
fn changed_spans<'a>(
    before: &'a [Cell],
    after: &'a [Cell],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let mut x = 0;
    std::iter::from_fn(move || {
        let differs = |(a, b): (&Cell, &Cell)| a != b;
        let start = x + before[x..].iter().zip(&after[x..]).position(differs)?;
        let len = before[start..]
            .iter()
            .zip(&after[start..])
            .take_while(|&(a, b)| a != b)
            .count();
        x = start + len;
        Some(start..x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Canvas, Rgb};

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn first_frame_clears_and_writes_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.draw_text(0, 0, ">-o", style);
        fb.draw_char(1, 1, '#', style);

        let text = encode(None, &fb);
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains(">-o"));
        assert!(text.contains('#'));
    }

    #[test]
    fn equal_frames_encode_to_nothing() {
        let mut a = FrameBuffer::new(4, 2);
        a.draw_text(0, 0, "abcd", CellStyle::default());
        let b = a.clone();
        assert_eq!(encode(Some(&a), &b), "");
    }

    #[test]
    fn single_change_moves_to_that_cell_only() {
        let style = CellStyle::default();
        let mut a = FrameBuffer::new(4, 2);
        a.draw_text(0, 0, "abcd", style);
        let mut b = a.clone();
        b.draw_char(1, 2, 'X', style);

        let text = encode(Some(&a), &b);
        // MoveTo is 1-based: row 2, column 3.
        assert!(text.contains("\x1b[2;3H"));
        assert!(text.contains('X'));
        assert!(!text.contains('a'));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn size_change_forces_full_redraw() {
        let a = FrameBuffer::new(4, 2);
        let b = FrameBuffer::new(5, 2);
        assert!(encode(Some(&a), &b).contains("\x1b[2J"));
    }

    #[test]
    fn one_style_escape_per_run() {
        let mut fb = FrameBuffer::new(6, 1);
        let gold = CellStyle::fg(Rgb::new(245, 200, 66)).bold();
        fb.draw_text(0, 0, "******", gold);

        let text = encode(None, &fb);
        assert_eq!(text.matches("38;2;245;200;66").count(), 1);
    }

    #[test]
    fn changed_spans_merge_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(8, 1);
        let mut b = a.clone();
        b.draw_text(0, 1, "XXX", style);
        b.draw_char(0, 6, 'Y', style);
        b.draw_char(0, 9, 'Z', style);

        let spans: Vec<_> = changed_spans(a.row(0), b.row(0)).collect();
        assert_eq!(spans, vec![1..4, 6..7]);
    }
}
