use crossterm::style::Color;
use game_types::ColorScheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub scheme: ColorScheme, // always Light or Dark once resolved
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub correct: Color,
    pub wrong: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGrey,
            accent: Color::DarkBlue,
            correct: Color::DarkGreen,
            wrong: Color::DarkRed,
            highlight: Color::DarkYellow,
        }
    }

    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            background: Color::Black,
            foreground: Color::White,
            muted: Color::Grey,
            accent: Color::Cyan,
            correct: Color::Green,
            wrong: Color::Red,
            highlight: Color::Yellow,
        }
    }

    /// Palette for a preference, resolving `system` from the environment
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        match resolve_scheme(scheme, colorfgbg.as_deref()) {
            ColorScheme::Light => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Turn `system` into light or dark using a `COLORFGBG` value like "0;15"
pub fn resolve_scheme(scheme: ColorScheme, colorfgbg: Option<&str>) -> ColorScheme {
    match scheme {
        ColorScheme::System => {
            let background = colorfgbg
                .and_then(|value| value.rsplit(';').next())
                .and_then(|bg| bg.trim().parse::<u8>().ok());

            match background {
                Some(7) | Some(15) => ColorScheme::Light,
                _ => ColorScheme::Dark,
            }
        }
        explicit => explicit,
    }
}
