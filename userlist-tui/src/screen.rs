//! Terminal setup, teardown and painting.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use userlist_lib::view::Frame;

use crate::ui::{self, Line, LineStyle};

/// Owns the terminal while the UI runs and restores it on drop, including on panic.
pub struct Screen {
    stdout: Stdout,
}

impl Screen {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// Paints the whole frame. `tick` advances the loading spinner.
    pub fn draw(&mut self, frame: &Frame, tick: usize) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let lines = ui::layout(frame, width, height, tick);

        for (y, line) in lines.iter().take(usize::from(height)).enumerate() {
            // Bounded by the take above.
            let y = y as u16;
            queue!(self.stdout, cursor::MoveTo(0, y))?;
            self.paint_line(line)?;
        }
        queue!(self.stdout, Clear(ClearType::FromCursorDown))?;
        self.stdout.flush()
    }

    fn paint_line(&mut self, line: &Line) -> io::Result<()> {
        match line.style {
            LineStyle::Title => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Cyan)
            )?,
            LineStyle::Header => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetAttribute(Attribute::Underlined)
            )?,
            LineStyle::Muted => queue!(self.stdout, SetForegroundColor(Color::DarkGrey))?,
            LineStyle::Error => queue!(
                self.stdout,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(Color::Red)
            )?,
            LineStyle::Normal => {}
        }
        queue!(
            self.stdout,
            Print(&line.text),
            Clear(ClearType::UntilNewLine),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    Ok(())
}
