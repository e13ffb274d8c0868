//! TerminalRenderer: flushes views to a real terminal.
//!
//! One pixel is one space cell with a truecolor background. The first frame,
//! and any frame whose size differs from the last one, is a full redraw; all
//! other frames only rewrite dirty runs.

use std::fmt;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::{debug, trace};

use crossterm::{
    cursor,
    style::{Print, ResetColor},
    terminal,
    tty::IsTty,
    Command, QueueableCommand,
};

use crate::core::World;
use crate::types::Color;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<World>,
    buf: Vec<u8>,
    frame_delay: Duration,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            frame_delay: Duration::ZERO,
        }
    }

    /// Sleep this long after every written frame so the terminal can catch up.
    pub fn with_frame_delay(mut self, frame_delay: Duration) -> Self {
        self.frame_delay = frame_delay;
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// The frame the terminal is assumed to show, if any.
    pub fn last_frame(&self) -> Option<&World> {
        self.last.as_ref()
    }

    /// Put the terminal in raw mode on the alternate screen.
    ///
    /// Fails if stdin is not a terminal. If the screen setup fails after raw
    /// mode was enabled, the terminal is restored before the error is returned.
    pub fn enter(&mut self) -> Result<()> {
        if !io::stdin().is_tty() {
            bail!("stdin is not a terminal");
        }
        terminal::enable_raw_mode().context("enable raw mode")?;
        if let Err(e) = self.setup_screen() {
            if let Err(undo) = self.exit() {
                debug!("terminal restore after failed setup: {undo:#}");
            }
            return Err(e);
        }
        Ok(())
    }

    fn setup_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.invalidate();
        self.flush_buf()
    }

    /// Restore the terminal state changed by [`enter`](Self::enter).
    ///
    /// Raw mode is disabled even when writing the restore sequence fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let written = self.flush_buf();
        terminal::disable_raw_mode().context("disable raw mode")?;
        written
    }

    /// Force the next render to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Write `view` to the terminal with a single buffered write.
    ///
    /// The view only becomes the diff baseline once its bytes were written. A
    /// failed write may leave the screen partly updated, so the next render is
    /// a full redraw.
    pub fn render(&mut self, view: &World) -> Result<()> {
        self.buf.clear();

        match self.last.as_ref() {
            Some(prev) if prev.same_size(view) => {
                encode_diff_into(prev, view, &mut self.buf)?;
            }
            Some(prev) => {
                debug!(
                    "full redraw: view resized {}x{} -> {}x{}",
                    prev.width(),
                    prev.height(),
                    view.width(),
                    view.height()
                );
                // Shrinking must not leave the old frame's edges behind.
                self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
                encode_full_into(view, &mut self.buf)?;
            }
            None => {
                debug!("full redraw: first frame {}x{}", view.width(), view.height());
                encode_full_into(view, &mut self.buf)?;
            }
        }

        if self.buf.is_empty() {
            return Ok(());
        }
        trace!("frame: {} bytes", self.buf.len());
        if let Err(e) = self.flush_buf() {
            self.invalidate();
            return Err(e);
        }

        match self.last.as_mut() {
            Some(prev) => prev.copy_from(view),
            None => self.last = Some(view.clone()),
        }

        if !self.frame_delay.is_zero() {
            thread::sleep(self.frame_delay);
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// The colour directive is only emitted when the colour changes within a row;
/// every row ends with a style reset, so colour state does not carry over.
pub fn encode_full_into(view: &World, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    for (y, row) in view.rows().enumerate() {
        let mut active: Option<Color> = None;
        for &color in row {
            if active != Some(color) {
                out.queue(SetPixelColor(color))?;
                active = Some(color);
            }
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        // No newline after the last row: it would scroll a screen-sized view.
        if y + 1 < view.height() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (dirty runs) into `out`.
///
/// Each run gets one cursor move; the colour directive is skipped when the
/// previous run left the same colour active.
pub fn encode_diff_into(prev: &World, next: &World, out: &mut Vec<u8>) -> Result<()> {
    let mut active: Option<Color> = None;

    for_each_dirty_run(prev, next, |x, y, len, color| {
        out.queue(cursor::MoveTo(term_coord(x), term_coord(y)))?;
        if active != Some(color) {
            out.queue(SetPixelColor(color))?;
            active = Some(color);
        }
        for _ in 0..len {
            out.queue(Print(' '))?;
        }
        Ok(())
    })?;

    if active.is_some() {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Visit every maximal run of cells that changed to one shared colour.
///
/// Calls `f(x, y, len, color)`. A clean cell or a different new colour ends
/// the run. If the sizes differ every cell of `next` counts as changed.
pub fn for_each_dirty_run(
    prev: &World,
    next: &World,
    mut f: impl FnMut(usize, usize, usize, Color) -> Result<()>,
) -> Result<()> {
    let same_size = prev.same_size(next);
    let w = next.width();

    for (y, row) in next.rows().enumerate() {
        let before = if same_size { Some(prev.row(y)) } else { None };
        let dirty = |x: usize| before.map_or(true, |b| b[x] != row[x]);

        let mut x = 0;
        while x < w {
            if !dirty(x) {
                x += 1;
                continue;
            }

            let start = x;
            let color = row[x];
            x += 1;
            while x < w && row[x] == color && dirty(x) {
                x += 1;
            }
            f(start, y, x - start, color)?;
        }
    }

    Ok(())
}

/// Truecolor background, `ESC[48;2;R;G;Bm`.
///
/// Terminals have no alpha channel; only RGB is sent. Written directly rather
/// than through `SetBackgroundColor`, which emits nothing when `NO_COLOR` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPixelColor(pub Color);

impl Command for SetPixelColor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[48;2;{};{};{}m", self.0.r, self.0.g, self.0.b)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "truecolor pixels require ANSI support",
        ))
    }
}

fn term_coord(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
