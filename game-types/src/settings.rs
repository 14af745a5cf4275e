use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
            ColorScheme::System => "system",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::System,
            ColorScheme::System => ColorScheme::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            "system" => Ok(ColorScheme::System),
            other => Err(GameError::UnknownColorScheme {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_round_trip_strings() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark, ColorScheme::System] {
            assert_eq!(scheme.as_str().parse::<ColorScheme>().unwrap(), scheme);
        }
        assert!("sepia".parse::<ColorScheme>().is_err());
    }
}
