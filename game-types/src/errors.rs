use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("No words available in the pool")]
    EmptyWordPool,
    #[error("Invalid session duration: {seconds}s")]
    InvalidDuration { seconds: u32 },
    #[error("Unknown difficulty: {value}")]
    UnknownDifficulty { value: String },
    #[error("Unknown color scheme: {value}")]
    UnknownColorScheme { value: String },
}
