//! Framebuffer to terminal output.
//!
//! A fresh renderer, a resize, or [`TerminalRenderer::invalidate`] forces a
//! full redraw. Otherwise only changed runs of cells are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Owns the terminal session (raw mode, alternate screen) and the last frame shown.
pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            terminal::SetTitle("2048"),
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        queue!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next frame (after a resize, for example).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand back the previously shown frame in its place.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.out.clear();
        let mut old = match self.shown.take() {
            Some(old) if old.width() == fb.width() && old.height() == fb.height() => {
                encode_diff_into(&old, fb, &mut self.out)?;
                old
            }
            _ => {
                encode_full_into(fb, &mut self.out)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush()?;

        std::mem::swap(&mut old, fb);
        self.shown = Some(old);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Append a clear-and-repaint of the whole of `fb` to `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut painter = RunPainter::new(out);
    for y in 0..fb.height() {
        painter.paint(fb, 0, y, fb.width())?;
    }
    painter.finish()
}

/// Append repaints of the cells that differ between `prev` and `next`.
///
/// Writes nothing at all when the frames are identical.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = RunPainter::new(out);
    for_each_changed_run(prev, next, |x, y, len| painter.paint(next, x, y, len))?;
    painter.finish()
}

/// Emits horizontal runs of cells, switching colors only when the style changes.
struct RunPainter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    painted: bool,
}

impl<'a> RunPainter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            painted: false,
        }
    }

    fn paint(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        self.painted = true;
        queue!(self.out, cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = fb.get(x + dx, y).unwrap_or_default();
            if self.style != Some(cell.style) {
                set_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            queue!(self.out, Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.painted {
            queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(rgb_to_color(style.fg)),
        SetBackgroundColor(rgb_to_color(style.bg)),
        SetAttribute(Attribute::Reset)
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
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

/// Call `f(x, y, len)` for each maximal horizontal run of differing cells.
///
/// Both framebuffers must have the same dimensions.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    for y in 0..next.height() {
        let differs = |x: u16| prev.get(x, y) != next.get(x, y);
        let mut x = 0;
        while x < w {
            if !differs(x) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }
    Ok(())
}
