use game_types::GameError;
use rand::Rng;
use rand::seq::SliceRandom;

/// Offline word list used when the word-list API cannot be reached
pub const BUILTIN_WORDS: &[&str] = &[
    "react",
    "javascript",
    "typescript",
    "component",
    "state",
    "props",
    "hook",
    "effect",
    "context",
    "redux",
];

#[derive(Debug, Clone, Default)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from raw entries, keeping only alphabetic words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && is_alphabetic(word))
            .collect();

        Self { words }
    }

    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Get a uniformly random word from the pool
    pub fn random_word(&self) -> Result<String, GameError> {
        self.random_word_with(&mut rand::thread_rng())
    }

    pub fn random_word_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GameError> {
        self.words
            .choose(rng)
            .cloned()
            .ok_or(GameError::EmptyWordPool)
    }
}

/// Check if word contains only ASCII letters
pub fn is_alphabetic(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphabetic())
}
