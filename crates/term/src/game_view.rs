//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, centered in the viewport:
//!
//! ```text
//!   1 2 ▼ 4 5 6 7        column-top row (digits, cursor marker)
//! ┌──────────────┐
//! │ · · ● · · · ·│       board cells, 2x1 terminal cells per grid cell
//! │ · ● ○ · · · ·│
//! └──────────────┘
//! ```
//!
//! plus a side panel (turn, moves, game number, key hints) and a centered
//! overlay line once the match ends.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Phase, Rgb};

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

/// Background shade of the play area.
const BOARD_BG: Rgb = Rgb::new(24, 26, 34);

/// A lightweight terminal renderer for the Connect Four board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render without a hover cursor (terminal phases, tests).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    /// Render the snapshot into an existing framebuffer, marking `cursor`
    /// in the column-top row when given.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport on every call.
    pub fn render_into_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<u8>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(' ', CellStyle::default());

        let board_px_w = snap.width as u16 * self.cell_w;
        let board_px_h = snap.height as u16 * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        // One extra row above the frame holds the column-top header.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: BOARD_BG,
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_header(fb, snap, cursor, start_x, start_y - 1);

        for row in 0..snap.height {
            for column in 0..snap.width {
                match snap.cell(column, row) {
                    Some(Some(seat)) => {
                        let highlight = snap.is_winning_cell(column, row);
                        let style = CellStyle {
                            fg: snap.seat_color(seat),
                            bg: BOARD_BG,
                            bold: highlight || snap.last_placed == Some((row, column)),
                            dim: matches!(snap.phase, Phase::Won(_)) && !highlight,
                        };
                        self.fill_cell(fb, start_x, start_y, column, row, '\u{25cf}', style);
                    }
                    Some(None) => self.draw_empty_cell(fb, start_x, start_y, column, row),
                    None => {}
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.phase {
            Phase::Won(seat) => {
                let text = format!("{} WINS", seat.label().to_uppercase());
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &text);
            }
            Phase::Tied => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "TIE GAME");
            }
            Phase::InProgress => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_cursor(
        &self,
        snap: &GameSnapshot,
        cursor: Option<u8>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_cursor(snap, cursor, viewport, &mut fb);
        fb
    }

    /// The column-top row: a marker over the hovered column, digits over
    /// the rest, dimmed once a column is full.
    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        cursor: Option<u8>,
        start_x: u16,
        header_y: u16,
    ) {
        for column in 0..snap.width {
            let px = start_x + 1 + column as u16 * self.cell_w;
            let hovered = cursor == Some(column) && !snap.phase.is_terminal();
            if hovered {
                let style = CellStyle {
                    fg: snap.seat_color(snap.current),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                    dim: false,
                };
                fb.put_char(px, header_y, '\u{25bc}', style);
            } else {
                let ch = if column < 9 {
                    (b'1' + column) as char
                } else {
                    '\u{b7}'
                };
                let style = CellStyle {
                    fg: Rgb::new(160, 160, 170),
                    bg: Rgb::new(0, 0, 0),
                    bold: false,
                    dim: !snap.is_column_playable(column),
                };
                fb.put_char(px, header_y, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '\u{250c}', style);
        fb.put_char(x + w - 1, y, '\u{2510}', style);
        fb.put_char(x, y + h - 1, '\u{2514}', style);
        fb.put_char(x + w - 1, y + h - 1, '\u{2518}', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '\u{2500}', style);
            fb.put_char(x + dx, y + h - 1, '\u{2500}', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '\u{2502}', style);
            fb.put_char(x + w - 1, y + dy, '\u{2502}', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, column: u8, row: u8) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, start_x, start_y, column, row, '\u{b7}', style);
    }

    /// Paint one grid cell: the glyph in the cell's left terminal column,
    /// background fill across the rest.
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        column: u8,
        row: u8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + column as u16 * self.cell_w;
        let py = start_y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.episode + 1), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        y = y.saturating_add(1);
        if snap.phase.is_terminal() {
            fb.put_str(panel_x, y, "-", value);
        } else {
            let disc = CellStyle {
                fg: snap.seat_color(snap.current),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            };
            fb.put_char(panel_x, y, '\u{25cf}', disc);
            fb.put_str(panel_x + 2, y, snap.current.label(), value);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snap.moves), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        let hint = CellStyle { dim: true, ..value };
        for line in [
            "\u{2190}/\u{2192} move",
            "space drop",
            "1-9 pick",
            "r restart",
            "q quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}
