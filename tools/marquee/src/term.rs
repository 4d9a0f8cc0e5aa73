//! Raw-mode terminal presentation of a pixel surface.
//!
//! The matrix is redrawn in place: each frame moves the cursor back up
//! over the previous dump and rewrites it, which reads as a steady display
//! rather than a scrolling log.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::ExecutableCommand;
use lumatrix_core::Surface;

/// RAII guard for raw mode and cursor visibility.
///
/// Key presses must arrive unbuffered and unechoed, like button input on
/// real matrix hardware; dropping the guard restores the terminal on every
/// exit path, including errors.
pub struct RawTerm;

impl RawTerm {
    /// Enters raw mode and hides the cursor.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        io::stdout().execute(Hide)?;
        Ok(Self)
    }
}

impl Drop for RawTerm {
    fn drop(&mut self) {
        let _ = io::stdout().execute(Show);
        let _ = disable_raw_mode();
    }
}

/// In-place frame writer for the ASCII matrix dump.
pub struct MatrixScreen {
    lines: u16,
    drawn_once: bool,
}

impl MatrixScreen {
    /// Creates a writer for surfaces of the given height.
    pub fn new(height: u32) -> Self {
        Self {
            // Matrix rows plus the status line.
            lines: height as u16 + 1,
            drawn_once: false,
        }
    }

    /// Paints the surface with a one-line status underneath it.
    pub fn present(&mut self, surface: &Surface, status: &str) -> Result<()> {
        let mut out = io::stdout();

        if self.drawn_once {
            out.execute(MoveUp(self.lines))?;
        }
        out.execute(MoveToColumn(0))?;
        self.drawn_once = true;

        // Row 0 is the bottom of the surface, so dump top-down.
        for y in (0..surface.height()).rev() {
            let mut line = String::with_capacity(surface.width() as usize * 2);
            for x in 0..surface.width() {
                line.push_str(if surface.pixel(x, y) { " #" } else { " ." });
            }
            // Raw mode needs the explicit carriage return.
            write!(out, "{line}\r\n")?;
        }

        out.execute(Clear(ClearType::CurrentLine))?;
        write!(out, "{status}\r\n")?;
        out.flush()?;
        Ok(())
    }
}
