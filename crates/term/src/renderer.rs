//! TerminalRenderer: flushes a framebuffer to the real terminal.
//!
//! The first frame (and every frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; afterwards only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`]
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size
    pub fn viewport(&self) -> Result<Viewport> {
        let (width, height) = terminal::size()?;
        Ok(Viewport::new(width, height))
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it with the previous frame.
    ///
    /// Keep one `FrameBuffer` and pass it in every frame; after the call it
    /// holds the previous frame and can be redrawn into without allocating.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two equally sized frames into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current_style: Option<CellStyle> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for every horizontal run of cells that differ.
///
/// Frames of different sizes are treated as entirely dirty.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        for y in 0..h {
            f(0, y, w)?;
        }
        return Ok(());
    }

    let differs = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if !differs(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(a: &FrameBuffer, b: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut out = Vec::new();
        for_each_changed_run(a, b, |x, y, len| {
            out.push((x, y, len));
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            b.put_char(x, 0, 'X', style);
        }
        b.put_char(5, 1, 'Y', style);

        assert_eq!(runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(4, 4);
        assert!(runs(&a, &a.clone()).is_empty());
    }

    #[test]
    fn size_change_marks_every_row() {
        let a = FrameBuffer::new(2, 2);
        let b = FrameBuffer::new(3, 2);
        assert_eq!(runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn diff_encoding_is_empty_of_text_when_nothing_changed() {
        let a = FrameBuffer::new(3, 1);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        let full_len = {
            let mut full = Vec::new();
            encode_full_into(&a, &mut full).unwrap();
            full.len()
        };
        assert!(out.len() < full_len);
    }

    #[test]
    fn full_encoding_contains_text() {
        let mut fb = FrameBuffer::new(5, 1);
        fb.put_str(0, 0, "Score", CellStyle::default().bold());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("Score"));
    }
}
