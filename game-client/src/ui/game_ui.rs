use game_core::GameSession;
use game_types::LetterStatus;
use std::io::{self, Write};

use super::{Frame, Span, progress_bar};

const PROGRESS_WIDTH: usize = 40;

pub fn render<W: Write>(frame: &mut Frame<'_, W>, session: &GameSession) -> io::Result<()> {
    let theme = *frame.theme();
    let state = &session.state;

    frame.title("Type the word:")?;

    let letters: Vec<Span> = session
        .letter_states()
        .into_iter()
        .map(|(ch, status)| {
            let color = match status {
                LetterStatus::Pending => theme.foreground,
                LetterStatus::Correct => theme.correct,
                LetterStatus::Wrong => theme.wrong,
            };
            Span::new(format!("{} ", ch), color)
        })
        .collect();
    frame.spans(&letters)?;
    frame.blank();

    frame.spans(&[
        Span::new("> ", theme.muted),
        Span::new(state.input.as_str(), theme.foreground),
        Span::new("_", theme.accent),
    ])?;
    frame.blank();

    let bar_color = if session.progress() < 0.25 {
        theme.wrong
    } else {
        theme.correct
    };
    frame.styled(&progress_bar(session.progress(), PROGRESS_WIDTH), bar_color)?;
    frame.blank();

    frame.spans(&[
        Span::new("Time ", theme.muted),
        Span::new(format!("{:.1}s", state.time_left), theme.foreground),
        Span::new("   Score ", theme.muted),
        Span::new(state.score.to_string(), theme.foreground),
        Span::new("   WPM ", theme.muted),
        Span::new(state.wpm.to_string(), theme.foreground),
    ])?;
    frame.styled(&format!("Difficulty: {}", state.difficulty), theme.muted)?;
    frame.blank();
    frame.styled("Esc: give up", theme.muted)
}
