use game_core::GameSession;
use std::io::{self, Write};

use super::{Frame, Span};

const WORD_COLUMN: usize = 16;

pub fn render<W: Write>(
    frame: &mut Frame<'_, W>,
    session: &GameSession,
    celebrating: bool,
) -> io::Result<()> {
    let theme = *frame.theme();
    let state = &session.state;

    frame.title(&format!("Game Over, {}!", session.player_name))?;
    if celebrating {
        frame.styled("*  .  *  .  *  Well played!  *  .  *  .  *", theme.highlight)?;
        frame.blank();
    }

    frame.text(&format!("Your score: {}", state.score))?;
    frame.text(&format!("Your WPM: {}", state.wpm))?;
    frame.blank();

    let words = session.unique_typed_words();
    if words.is_empty() {
        frame.styled("No words typed this time.", theme.muted)?;
    } else {
        frame.styled(&format!("{:<width$}Meaning", "Word", width = WORD_COLUMN), theme.accent)?;
        for typed in words {
            frame.spans(&[
                Span::new(format!("{:<width$}", typed.word, width = WORD_COLUMN), theme.foreground),
                Span::new(typed.meaning_or_fallback(), theme.muted),
            ])?;
        }
    }

    frame.blank();
    frame.styled(
        "Enter: play again   h: home   s: scoreboard   q: quit",
        theme.muted,
    )
}
