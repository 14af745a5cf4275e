use game_types::Difficulty;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Period of the state-update tick
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Remaining time at or below which the session ends
pub const GAME_OVER_EPSILON: f64 = 0.1;

pub const COUNTDOWN_SECONDS: u32 = 3;
pub const DEFAULT_DURATION_SECONDS: u32 = 30;

/// Session lengths offered on the home screen and scoreboard filter
pub const SESSION_DURATIONS: [u32; 3] = [30, 60, 120];

/// Tuning constants selected by difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTuning {
    /// Seconds of remaining time lost per real second
    pub decay_rate: f64,
    /// Seconds added for each completed word
    pub time_bonus: f64,
    /// Seconds removed for each input that leaves the word's prefix
    pub wrong_char_penalty: f64,
}

pub fn tuning(difficulty: Difficulty) -> DifficultyTuning {
    match difficulty {
        Difficulty::Easy => DifficultyTuning {
            decay_rate: 0.2,
            time_bonus: 3.0,
            wrong_char_penalty: 0.3,
        },
        Difficulty::Normal => DifficultyTuning {
            decay_rate: 0.3,
            time_bonus: 2.0,
            wrong_char_penalty: 0.5,
        },
        Difficulty::Hard => DifficultyTuning {
            decay_rate: 0.4,
            time_bonus: 1.0,
            wrong_char_penalty: 0.7,
        },
    }
}

/// Next offered duration after `current`, wrapping around
pub fn next_duration(current: u32) -> u32 {
    SESSION_DURATIONS
        .iter()
        .position(|&d| d == current)
        .map(|i| SESSION_DURATIONS[(i + 1) % SESSION_DURATIONS.len()])
        .unwrap_or(DEFAULT_DURATION_SECONDS)
}
