//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

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

const BACKGROUND: Rgb = Rgb::new(220, 208, 255);
const TEXT: Rgb = Rgb::new(50, 20, 65);
const BOARD: Rgb = Rgb::new(115, 79, 150);
const TILE_TEXT_DARK: Rgb = Rgb::new(50, 20, 65);
const TILE_TEXT_LIGHT: Rgb = Rgb::new(255, 255, 255);
const WIN: Rgb = Rgb::new(237, 194, 46);
const GAME_OVER: Rgb = Rgb::new(220, 40, 40);

/// Tile backgrounds indexed by log2(value); index 0 is the empty cell.
/// Values past the end reuse the last color.
const TILE_COLORS: [Rgb; 12] = [
    Rgb::new(30, 18, 55),
    Rgb::new(235, 218, 255),
    Rgb::new(253, 222, 238),
    Rgb::new(249, 140, 182),
    Rgb::new(245, 109, 109),
    Rgb::new(252, 169, 133),
    Rgb::new(235, 230, 99),
    Rgb::new(191, 228, 118),
    Rgb::new(145, 210, 144),
    Rgb::new(134, 207, 190),
    Rgb::new(154, 206, 223),
    Rgb::new(250, 250, 250),
];

/// Style for a tile of the given value (0 = empty).
pub fn tile_style(value: Tile) -> CellStyle {
    let index = if value == 0 {
        0
    } else {
        value.trailing_zeros() as usize
    };
    let bg = TILE_COLORS[index.min(TILE_COLORS.len() - 1)];
    // Light tiles (2, 4, and 2048+) need dark text.
    let fg = if value <= 4 || index >= TILE_COLORS.len() - 1 {
        TILE_TEXT_DARK
    } else {
        TILE_TEXT_LIGHT
    };
    CellStyle::new(fg, bg).bold()
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile pitch in terminal columns (including the gap).
    cell_w: u16,
    /// Tile pitch in terminal rows (including the gap).
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Pitch used when the configured tile size does not fit the viewport.
const COMPACT_CELL: (u16, u16) = (6, 1);

/// Minimum side panel width worth drawing.
const PANEL_MIN_W: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    start_y: u16,
    cell_w: u16,
    cell_h: u16,
    gap_x: u16,
    gap_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    /// Top-left corner of tile (row, col) and its drawable size.
    fn tile_rect(&self, row: u16, col: u16) -> (u16, u16, u16, u16) {
        let x = self.start_x + 1 + self.gap_x + col * self.cell_w;
        let y = self.start_y + 1 + self.gap_y + row * self.cell_h;
        (x, y, self.cell_w - self.gap_x, self.cell_h - self.gap_y)
    }
}

impl Default for GameView {
    fn default() -> Self {
        // 8x4 pitch gives 7x3 tiles, roughly square in typical terminal fonts.
        Self {
            cell_w: 8,
            cell_h: 4,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, size: u16, viewport: Viewport) -> Layout {
        let frame_dims = |cell_w: u16, cell_h: u16| {
            let gap_x = u16::from(cell_w > 3);
            let gap_y = u16::from(cell_h > 2);
            (gap_x, gap_y, size * cell_w + gap_x + 2, size * cell_h + gap_y + 2)
        };

        let (mut cell_w, mut cell_h) = (self.cell_w, self.cell_h);
        let (mut gap_x, mut gap_y, mut frame_w, mut frame_h) = frame_dims(cell_w, cell_h);
        if frame_w > viewport.width || frame_h > viewport.height {
            (cell_w, cell_h) = COMPACT_CELL;
            (gap_x, gap_y, frame_w, frame_h) = frame_dims(cell_w, cell_h);
        }

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            start_x,
            start_y,
            cell_w,
            cell_h,
            gap_x,
            gap_y,
            frame_w,
            frame_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let size = snap.size as u16;
        if size == 0 {
            return;
        }
        let layout = self.layout(size, viewport);

        let board = CellStyle::new(BOARD, BOARD);
        let border = CellStyle::new(TEXT, BACKGROUND);

        // Board background and border.
        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            board,
        );
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        for row in 0..size {
            for col in 0..size {
                let value = snap.tile(row as usize, col as usize);
                let fresh = snap.last_spawn == Some((row as usize, col as usize));
                self.draw_tile(fb, &layout, row, col, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, viewport, &layout);
        self.draw_status_line(fb, snap, viewport, &layout);

        if !snap.playable() {
            self.draw_overlay_text(fb, &layout, " GAME OVER ", GAME_OVER);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: u16,
        col: u16,
        value: Tile,
        fresh: bool,
    ) {
        let (x, y, w, h) = layout.tile_rect(row, col);
        let style = tile_style(value);
        fb.fill_rect(x, y, w, h, ' ', style);

        let text_y = y + (h - 1) / 2;
        if value == 0 {
            let dot = CellStyle {
                fg: BOARD,
                bold: false,
                dim: true,
                ..style
            };
            fb.put_str_centered(x, text_y, w, "·", dot);
            return;
        }

        let mut digits = [0u8; 10];
        let text = format_tile(value, &mut digits);
        let style = CellStyle {
            dim: false,
            bold: true,
            ..style
        };
        fb.put_str_centered(x, text_y, w, text, style);
        if fresh && w > text.len() as u16 + 1 {
            // Mark the tile that just spawned.
            fb.put_char(x, y, '•', CellStyle { bold: false, ..style });
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(TEXT, BACKGROUND).bold();
        let value = CellStyle::new(TEXT, BACKGROUND);
        let dim = CellStyle { dim: true, ..value };

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "2048", CellStyle::new(WIN, BACKGROUND).bold());
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST TILE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.max_tile as u64, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        for help in ["arrows/hjkl/wasd", "r  new game", "q  quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let y = layout.start_y.saturating_add(layout.frame_h);
        if y >= viewport.height {
            return;
        }
        let (text, color) = if snap.game_over {
            ("Game over! No moves left.", GAME_OVER)
        } else if snap.won {
            ("You reached 2048! Keep going.", WIN)
        } else {
            ("Use arrow keys to play!", TEXT)
        };
        let style = CellStyle::new(color, BACKGROUND).bold();
        fb.put_str_centered(layout.start_x, y, layout.frame_w, text, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str, color: Rgb) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let style = CellStyle::new(TILE_TEXT_LIGHT, color).bold();
        fb.put_str_centered(layout.start_x, mid_y, layout.frame_w, text, style);
    }
}

/// Format a tile value into `buf` without allocating.
fn format_tile(value: Tile, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}
