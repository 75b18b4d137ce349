//! GameView: maps a `GameInfo` snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-tested against the framebuffer.
//!
//! Layout, left to right: the bordered field (two terminal columns per cell),
//! then a side panel with the NEXT box, the numbers and a key legend.

use crate::core::GameInfo;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell as FieldCell, GameStatus, BLOCK, FIELD_HEIGHT, FIELD_WIDTH};

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

const BLANK: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const WELL: CellStyle = CellStyle::new(Rgb::new(70, 70, 80), Rgb::new(20, 20, 28));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

const BLOCK_CHAR: char = '█';

/// Foreground color for a field cell value (type id + 1)
pub fn cell_color(value: FieldCell) -> Option<Rgb> {
    let rgb = match value {
        1 => Rgb::new(80, 220, 220),  // I cyan
        2 => Rgb::new(240, 220, 80),  // O yellow
        3 => Rgb::new(200, 110, 220), // T magenta
        4 => Rgb::new(100, 220, 120), // J green
        5 => Rgb::new(220, 80, 80),   // L red
        6 => Rgb::new(80, 120, 230),  // S blue
        7 => Rgb::new(235, 235, 235), // Z white
        _ => return None,
    };
    Some(rgb)
}

/// Renders the game screen.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

/// Where the field frame landed, in terminal coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFrame {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame position for a viewport: centered vertically, and horizontally
    /// together with the side panel.
    pub fn field_frame(&self, viewport: Viewport) -> FieldFrame {
        let w = FIELD_WIDTH as u16 * self.cell_w + 2;
        let h = FIELD_HEIGHT as u16 + 2;
        let total_w = w + 2 + PANEL_WIDTH;
        FieldFrame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, info: &GameInfo, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(BLANK.with_char(' '));

        let frame = self.field_frame(viewport);
        draw_border(fb, frame.x, frame.y, frame.w, frame.h);

        for (row, cells) in info.field.iter_rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let px = frame.x + 1 + col as u16 * self.cell_w;
                let py = frame.y + 1 + row as u16;
                self.draw_cell(fb, px, py, value);
            }
        }

        self.draw_side_panel(fb, info, frame);

        match info.status {
            GameStatus::Running => {}
            GameStatus::Paused => draw_overlay(fb, frame, &["PAUSE"]),
            GameStatus::Terminated if info.is_new_high_score() => {
                draw_overlay(fb, frame, &["GAME OVER", "New high score!", "Press any key"])
            }
            GameStatus::Terminated => draw_overlay(fb, frame, &["GAME OVER", "Press any key"]),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, info: &GameInfo, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(info, viewport, &mut fb);
        fb
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, px: u16, py: u16, value: FieldCell) {
        match cell_color(value) {
            Some(fg) => {
                let style = CellStyle::new(fg, WELL.bg);
                fb.fill_rect(px, py, self.cell_w, 1, BLOCK_CHAR, style);
            }
            None => {
                fb.fill_rect(px, py, self.cell_w, 1, ' ', WELL);
                fb.put_char(px, py, '·', WELL);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, info: &GameInfo, frame: FieldFrame) {
        let x = frame.x + frame.w + 2;
        let mut y = frame.y;

        // NEXT box: 4x4 preview at the same cell width as the field
        let box_w = BLOCK as u16 * self.cell_w + 2;
        let box_h = BLOCK as u16 + 2;
        draw_border(fb, x, y, box_w, box_h);
        fb.put_str(x + 2, y, "NEXT", LABEL);
        for (row, cells) in info.next.iter_rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let px = x + 1 + col as u16 * self.cell_w;
                let py = y + 1 + row as u16;
                match cell_color(value) {
                    Some(fg) => fb.fill_rect(px, py, self.cell_w, 1, BLOCK_CHAR, CellStyle::new(fg, BLANK.bg)),
                    None => fb.fill_rect(px, py, self.cell_w, 1, ' ', BLANK),
                }
            }
        }
        y += box_h + 1;

        for (label, value) in [
            ("Score", info.score),
            ("High Score", info.high_score.max(info.score)),
            ("Level", info.level),
            ("Speed", info.speed),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        for hint in ["ENTER start", "P     pause", "Q     quit", "SPACE rotate", "DOWN  drop"] {
            if y >= frame.y + frame.h {
                break;
            }
            fb.put_str(x, y, hint, HINT);
            y += 1;
        }
    }
}

/// Width reserved right of the field for the side panel
const PANEL_WIDTH: u16 = 14;

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

/// Centered lines over the middle of the field
fn draw_overlay(fb: &mut FrameBuffer, frame: FieldFrame, lines: &[&str]) {
    let top = (frame.y + frame.h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, OVERLAY);
    }
}
