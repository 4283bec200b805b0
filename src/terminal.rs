use std::io;
use std::io::Stdout;
use std::io::Write;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::warn;

use crate::app::Display;
use crate::app::EventSource;
use crate::events::Event;
use crate::io::convert_event;
use crate::render::Frame;

/// Puts the terminal in raw mode on the alternate screen, and puts it back when dropped.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let guard = Self { _private: () };
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Show)?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show) {
            warn!("failed to leave alternate screen: {e}");
        }

        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Events from crossterm
pub struct CrosstermInput;

impl EventSource for CrosstermInput {
    fn poll(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        Ok(convert_event(event::read()?))
    }
}

/// Draws frames on stdout
pub struct CrosstermDisplay {
    stdout: Stdout,
}

impl CrosstermDisplay {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CrosstermDisplay {
    fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(
            self.stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;

        for line in frame.lines() {
            queue!(self.stdout, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        let (col, row) = frame.cursor_position();
        queue!(self.stdout, cursor::MoveTo(col, row))?;

        self.stdout.flush()
    }
}
