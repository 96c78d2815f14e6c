use std::io::{self, Write};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

/// Keeps terminal mouse capture on while alive
///
/// The panic hook installed by `ratatui::init` restores raw mode and the
/// alternate screen only, so capture is released on drop, including while
/// unwinding.
pub struct MouseCapture<W: Write> {
    writer: W,
}

impl<W: Write> MouseCapture<W> {
    pub fn enable(mut writer: W) -> io::Result<Self> {
        execute!(writer, EnableMouseCapture)?;
        Ok(Self { writer })
    }
}

impl<W: Write> Drop for MouseCapture<W> {
    fn drop(&mut self) {
        let _ = execute!(self.writer, DisableMouseCapture);
    }
}

#[cfg(test)]
#[path = "mouse_capture_tests.rs"]
mod mouse_capture_tests;
