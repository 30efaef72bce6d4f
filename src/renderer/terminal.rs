//! crossterm output

use std::io::{self, Stdout, Write};

use crossterm::style::Print;
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use super::frame::{CELL_COLUMNS, Frame};
use crate::sim::RenderSnapshot;

/// Draws snapshots on the alternate screen
pub struct TerminalRenderer {
    stdout: Stdout,
    /// Size of the last frame, to clear leftovers when it shrinks
    last_size: (usize, usize),
    active: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last_size: (0, 0),
            active: false,
        }
    }

    /// Enter the alternate screen in raw mode
    pub fn setup(&mut self, title: &str) -> io::Result<()> {
        execute!(
            self.stdout,
            EnterAlternateScreen,
            terminal::SetTitle(title),
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        terminal::enable_raw_mode()?;
        self.active = true;
        Ok(())
    }

    /// Leave the alternate screen and restore the cursor
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
    }

    pub fn draw(&mut self, snap: &RenderSnapshot) -> io::Result<()> {
        let frame = Frame::compose(snap);
        let size = (frame.width(), frame.lines.len());
        if size != self.last_size {
            queue!(self.stdout, terminal::Clear(ClearType::All))?;
            self.last_size = size;
        }

        for (row, line) in frame.lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), Print(line))?;
        }
        self.stdout.flush()
    }

    /// Arena size in cells that fills the terminal, leaving room for the
    /// border and the HUD line
    pub fn fullscreen_cells() -> io::Result<(i32, i32)> {
        let (cols, rows) = terminal::size()?;
        let cols = (cols as usize / CELL_COLUMNS) as i32 - 2;
        let rows = rows as i32 - 3;
        Ok((cols, rows))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::error!("Failed to restore terminal: {}", e);
        }
    }
}
