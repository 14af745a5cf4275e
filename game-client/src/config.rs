use game_core::{DEFAULT_DURATION_SECONDS, TICK_INTERVAL};
use game_persistence::connection::DEFAULT_DATABASE_URL;
use game_types::Difficulty;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_WORD_LIST_URL: &str = "https://random-word-api.herokuapp.com/all";
pub const DEFAULT_DICTIONARY_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_LOG_FILE: &str = "speed-typer.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub word_list_url: String,
    pub dictionary_url: String,
    pub database_url: String,
    pub tick_interval: Duration,
    pub default_duration_seconds: u32,
    pub default_difficulty: Difficulty,
    pub log_file: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset or invalid values use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms: u64 = parse_or(&lookup, "TICK_INTERVAL_MS", TICK_INTERVAL.as_millis() as u64);
        let duration: u32 = parse_or(&lookup, "DEFAULT_DURATION_SECONDS", DEFAULT_DURATION_SECONDS);

        Self {
            word_list_url: lookup("WORD_LIST_URL")
                .unwrap_or_else(|| DEFAULT_WORD_LIST_URL.to_string()),
            dictionary_url: lookup("DICTIONARY_URL")
                .unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string()),
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            tick_interval: if tick_ms == 0 {
                TICK_INTERVAL
            } else {
                Duration::from_millis(tick_ms)
            },
            default_duration_seconds: if duration == 0 {
                DEFAULT_DURATION_SECONDS
            } else {
                duration
            },
            default_difficulty: parse_or(&lookup, "DEFAULT_DIFFICULTY", Difficulty::Normal),
            log_file: lookup("SPEED_TYPER_LOG").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}: {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.word_list_url, DEFAULT_WORD_LIST_URL);
        assert_eq!(config.dictionary_url, DEFAULT_DICTIONARY_URL);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.default_duration_seconds, 30);
        assert_eq!(config.default_difficulty, Difficulty::Normal);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("TICK_INTERVAL_MS", "50"),
            ("DEFAULT_DURATION_SECONDS", "120"),
            ("DEFAULT_DIFFICULTY", "hard"),
            ("DICTIONARY_URL", "http://localhost:9000/entries"),
        ]);
        assert_eq!(config.tick_interval, Duration::from_millis(50));
        assert_eq!(config.default_duration_seconds, 120);
        assert_eq!(config.default_difficulty, Difficulty::Hard);
        assert_eq!(config.dictionary_url, "http://localhost:9000/entries");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("TICK_INTERVAL_MS", "fast"),
            ("DEFAULT_DURATION_SECONDS", "0"),
            ("DEFAULT_DIFFICULTY", "nightmare"),
        ]);
        assert_eq!(config.tick_interval, TICK_INTERVAL);
        assert_eq!(config.default_duration_seconds, DEFAULT_DURATION_SECONDS);
        assert_eq!(config.default_difficulty, Difficulty::Normal);
    }
}
