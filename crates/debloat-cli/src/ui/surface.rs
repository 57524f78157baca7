//! Terminal surface - raw-mode screen ownership
//!
//! The menu owns the terminal exclusively. Blocking device work runs with the
//! terminal suspended (cooked mode, main screen) so subprocess output and log
//! lines print normally. Suspension is scoped: [`Suspended`] resumes raw mode
//! when dropped, on every exit path.

use crate::menu::MenuKey;
use crossterm::{
    QueueableCommand, cursor, event,
    event::Event,
    execute,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{BufRead, Result, Stdout, Write, stdout};

use super::theme::Theme;

/// The terminal capabilities the menu needs.
pub trait Surface {
    /// Clear the whole screen.
    fn clear(&mut self) -> Result<()>;

    /// Print `text` at `row`/`col`, optionally highlighted.
    fn print_at(&mut self, row: u16, col: u16, text: &str, highlight: bool) -> Result<()>;

    /// Flush queued output.
    fn flush(&mut self) -> Result<()>;

    /// Block until one key is pressed.
    fn read_key(&mut self) -> Result<MenuKey>;

    /// Leave raw mode and the alternate screen.
    fn suspend(&mut self) -> Result<()>;

    /// Re-enter raw mode and the alternate screen.
    fn resume(&mut self) -> Result<()>;

    /// While suspended, show `prompt` and wait for the user to press Enter.
    fn pause(&mut self, prompt: &str) -> Result<()>;
}

/// Scoped suspension of a [`Surface`]. Resumes on drop.
pub struct Suspended<'a> {
    surface: &'a mut dyn Surface,
}

impl std::fmt::Debug for Suspended<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suspended").finish_non_exhaustive()
    }
}

impl<'a> Suspended<'a> {
    /// Suspend `surface` until the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns the terminal error if suspension fails; the surface is then
    /// resumed immediately.
    pub fn new(surface: &'a mut dyn Surface) -> Result<Self> {
        if let Err(e) = surface.suspend() {
            let _ = surface.resume();
            return Err(e);
        }
        Ok(Self { surface })
    }

    /// Wait for the user to acknowledge the output.
    ///
    /// # Errors
    ///
    /// Returns the terminal error if input cannot be read.
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.surface.pause(prompt)
    }
}

impl Drop for Suspended<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.surface.resume() {
            tracing::error!("Failed to restore terminal: {e}");
        }
    }
}

/// A [`Surface`] on the real terminal.
///
/// Created in raw mode on the alternate screen; dropping it restores the
/// terminal even if the menu loop exits with an error.
pub struct CrosstermSurface {
    stdout: Stdout,
    theme: Theme,
    raw: bool,
}

impl std::fmt::Debug for CrosstermSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrosstermSurface")
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}

impl CrosstermSurface {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered.
    pub fn enter() -> Result<Self> {
        let mut surface = Self {
            stdout: stdout(),
            theme: Theme::default(),
            raw: false,
        };
        surface.resume()?;
        Ok(surface)
    }
}

impl Surface for CrosstermSurface {
    fn clear(&mut self) -> Result<()> {
        self.stdout.queue(Clear(ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        Ok(())
    }

    fn print_at(&mut self, row: u16, col: u16, text: &str, highlight: bool) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(col, row))?;
        if highlight {
            self.stdout
                .queue(SetForegroundColor(self.theme.colors.highlight_fg))?
                .queue(SetBackgroundColor(self.theme.colors.highlight_bg))?
                .queue(SetAttribute(Attribute::Bold))?;
        }
        self.stdout.queue(Print(text))?;
        if highlight {
            self.stdout
                .queue(SetAttribute(Attribute::Reset))?
                .queue(ResetColor)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()
    }

    fn read_key(&mut self) -> Result<MenuKey> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(k) = MenuKey::from_key_event(&key) {
                        return Ok(k);
                    }
                }
                // Redraw after a resize.
                Event::Resize(..) => return Ok(MenuKey::Other),
                _ => {}
            }
        }
    }

    fn suspend(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.raw = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, LeaveAlternateScreen, cursor::Show)
    }

    fn resume(&mut self) -> Result<()> {
        if self.raw {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        self.raw = true;
        if let Err(e) = execute!(self.stdout, EnterAlternateScreen, cursor::Hide) {
            self.raw = false;
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(())
    }

    fn pause(&mut self, prompt: &str) -> Result<()> {
        print!("\n  {prompt}");
        self.stdout.flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = self.suspend();
    }
}
