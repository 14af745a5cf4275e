use std::io::{self, Write};

use super::{Frame, Span};
use crate::app::{HomeField, HomeForm};

const LABEL_WIDTH: usize = 14;

pub fn render<W: Write>(frame: &mut Frame<'_, W>, form: &HomeForm) -> io::Result<()> {
    let theme = *frame.theme();

    frame.title("Speed Typer")?;
    frame.styled("Type each word before the clock runs out.", theme.muted)?;
    frame.blank();

    let name = if form.focus == HomeField::Name {
        format!("{}_", form.name)
    } else {
        form.name.clone()
    };
    let rows = [
        (HomeField::Name, "Name", name),
        (HomeField::Difficulty, "Difficulty", format!("< {} >", form.difficulty)),
        (HomeField::Duration, "Time", format!("< {}s >", form.duration_seconds)),
        (HomeField::ColorScheme, "Colors", format!("< {} >", form.color_scheme)),
    ];

    for (field, label, value) in rows {
        let focused = field == form.focus;
        let marker = if focused { "> " } else { "  " };
        let value_color = if focused { theme.highlight } else { theme.foreground };
        frame.spans(&[
            Span::new(
                format!("{}{:<width$}", marker, label, width = LABEL_WIDTH),
                theme.accent,
            ),
            Span::new(value, value_color),
        ])?;
    }

    if let Some(error) = &form.error {
        frame.blank();
        frame.styled(error, theme.wrong)?;
    }

    frame.blank();
    frame.styled(
        "Enter: play   Tab: next field   \u{2190}/\u{2192}: change   F2: scoreboard   Esc: quit",
        theme.muted,
    )
}
