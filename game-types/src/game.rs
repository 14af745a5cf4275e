use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::GameError;

/// Placeholder shown for a typed word whose definition is unknown.
pub const MEANING_FALLBACK: &str = "Meaning not available";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Next level in selector order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

/// A word the player finished, with its dictionary meaning once known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedWord {
    pub word: String,
    pub meaning: Option<String>, // None while the lookup is in flight
}

impl TypedWord {
    pub fn meaning_or_fallback(&self) -> &str {
        self.meaning.as_deref().unwrap_or(MEANING_FALLBACK)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub current_word: String,
    pub input: String,
    pub time_left: f64,
    pub score: u32,
    pub game_over: bool,
    pub difficulty: Difficulty,
    pub typed_words: Vec<TypedWord>,
    pub wpm: u32,
}

impl GameState {
    pub fn new(duration_seconds: u32, difficulty: Difficulty) -> Self {
        Self {
            current_word: String::new(),
            input: String::new(),
            time_left: duration_seconds as f64,
            score: 0,
            game_over: false,
            difficulty,
            typed_words: Vec::new(),
            wpm: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Pending, // not typed yet
    Correct,
    Wrong,
}
