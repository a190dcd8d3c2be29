//! Terminal output for session frames.
//!
//! Each frame is encoded into one byte buffer of crossterm commands and
//! written with a single flush. When the previous frame has the same size only
//! the spans of cells that changed are repainted.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Owns the terminal between [`enter`](Self::enter) and [`exit`](Self::exit).
pub struct TerminalRenderer {
    out: io::Stdout,
    scratch: Vec<u8>,
    previous: Option<FrameBuffer>,
    raw: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            scratch: Vec::with_capacity(32 * 1024),
            previous: None,
            raw: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.raw = true;
        self.previous = None;
        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.write_scratch()
    }

    /// Restore the terminal. A second call is a no-op.
    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        self.scratch.clear();
        queue!(
            self.scratch,
            SetAttribute(Attribute::Reset),
            ResetColor,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.write_scratch()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Repaint everything on the next draw, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Paint `fb` and keep it as the reference for the next diff.
    ///
    /// The buffers are swapped rather than cloned, so afterwards `fb` holds an
    /// older frame that the caller redraws from scratch.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_frame(self.previous.as_ref(), fb, &mut self.scratch)?;
        self.write_scratch()?;

        let mut kept = self
            .previous
            .take()
            .unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut kept, fb);
        self.previous = Some(kept);
        Ok(())
    }

    fn write_scratch(&mut self) -> Result<()> {
        self.out
            .write_all(&self.scratch)
            .and_then(|()| self.out.flush())
            .context("failed to write to terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode `next` into `out`.
///
/// Without a same-sized `previous` frame the screen is cleared and every cell
/// is painted; otherwise only changed spans are.
pub fn encode_frame(
    previous: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut painter = Painter::new(out);
    match previous {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            changed_spans(prev, next, |x, y, len| painter.span(next, x, y, len))?;
        }
        _ => {
            queue!(painter.out, terminal::Clear(terminal::ClearType::All))?;
            for y in 0..next.height() {
                painter.span(next, 0, y, next.width())?;
            }
        }
    }
    painter.finish()
}

/// Queues cells while remembering the last emitted style.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn span(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        for cx in x..x.saturating_add(len) {
            self.cell(fb.get(cx, y).unwrap_or_default())?;
        }
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(truecolor(cell.style.fg)),
                SetBackgroundColor(truecolor(cell.style.bg))
            )?;
            if cell.style.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(cell.style);
        }
        queue!(self.out, Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }
}

fn truecolor(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Report each maximal run of differing cells per row as `(x, y, len)`.
/// Both frames must have the same size.
fn changed_spans(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut visit: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let width = usize::from(next.width());
    if width == 0 {
        return Ok(());
    }
    let rows = prev.cells().chunks(width).zip(next.cells().chunks(width));
    for (y, (old, new)) in rows.enumerate() {
        let mut start: Option<usize> = None;
        for (x, (a, b)) in old.iter().zip(new).enumerate() {
            match (a != b, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    visit(s as u16, y as u16, (x - s) as u16)?;
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            visit(s as u16, y as u16, (width - s) as u16)?;
        }
    }
    Ok(())
}
