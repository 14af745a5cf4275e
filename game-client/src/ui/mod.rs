pub mod countdown;
pub mod game_over;
pub mod game_ui;
pub mod home;
pub mod loading;
pub mod scoreboard;
pub mod terminal;
pub mod theme;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

use crate::app::{App, Screen};
pub use theme::Theme;

const LEFT_MARGIN: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub color: Color,
}

impl Span {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Line-oriented drawing surface for one full redraw
pub struct Frame<'a, W: Write> {
    out: &'a mut W,
    theme: Theme,
    row: u16,
}

impl<'a, W: Write> Frame<'a, W> {
    pub fn begin(out: &'a mut W, theme: Theme) -> io::Result<Self> {
        queue!(
            out,
            SetBackgroundColor(theme.background),
            Clear(ClearType::All),
            MoveTo(0, 0)
        )?;
        Ok(Self { out, theme, row: 1 })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn title(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Bold))?;
        self.styled(text, self.theme.accent)?;
        queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
        self.blank();
        Ok(())
    }

    pub fn text(&mut self, text: &str) -> io::Result<()> {
        self.styled(text, self.theme.foreground)
    }

    pub fn styled(&mut self, text: &str, color: Color) -> io::Result<()> {
        self.spans(&[Span::new(text, color)])
    }

    pub fn spans(&mut self, spans: &[Span]) -> io::Result<()> {
        queue!(self.out, MoveTo(LEFT_MARGIN, self.row))?;
        for span in spans {
            queue!(
                self.out,
                SetBackgroundColor(self.theme.background),
                SetForegroundColor(span.color),
                Print(&span.text)
            )?;
        }
        self.row += 1;
        Ok(())
    }

    pub fn blank(&mut self) {
        self.row += 1;
    }

    pub fn finish(self) -> io::Result<()> {
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

/// Fixed-width bar for a fraction in [0, 1]
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Redraw the whole screen for the app's current state
pub fn draw<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    let mut frame = Frame::begin(out, app.theme())?;

    match app.screen() {
        Screen::Home => home::render(&mut frame, app.home())?,
        Screen::Loading => loading::render(&mut frame, app.spinner_frame())?,
        Screen::Countdown => {
            countdown::render(&mut frame, &app.home().player_name(), app.countdown())?
        }
        Screen::Playing => {
            if let Some(session) = app.session() {
                game_ui::render(&mut frame, session)?;
            }
        }
        Screen::GameOver => {
            if let Some(session) = app.session() {
                game_over::render(&mut frame, session, app.celebrating())?;
            }
        }
        Screen::Scoreboard => {
            scoreboard::render(&mut frame, app.scoreboard_filter(), app.scoreboard_rows())?
        }
        Screen::Quit => {}
    }

    frame.finish()
}

#[cfg(test)]
pub(crate) fn capture<F>(render: F) -> String
where
    F: FnOnce(&mut Frame<'_, Vec<u8>>) -> io::Result<()>,
{
    let mut out = Vec::new();
    {
        let mut frame = Frame::begin(&mut out, Theme::dark()).unwrap();
        render(&mut frame).unwrap();
        frame.finish().unwrap();
    }
    String::from_utf8(out).unwrap()
}
