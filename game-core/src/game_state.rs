use anyhow::Result;
use game_types::{
    Difficulty, GameError, GameState, LetterStatus, ScoreEntry, SessionId, TypedWord,
};
use uuid::Uuid;

use crate::{GAME_OVER_EPSILON, GameEvent, GameEventBus, WordPool, tuning, words_per_minute};

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Running,
    /// Emitted once, on the tick that ends the session
    GameOver(ScoreEntry),
    /// The session already ended; the tick was ignored
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    Ignored,
    Typing,
    Mistyped { penalty: f64 },
    WordCompleted { word: String, next_word: String },
}

/// One play session: the mutable game state plus what it needs to advance
#[derive(Debug)]
pub struct GameSession {
    pub id: SessionId,
    pub state: GameState,
    pub player_name: String,
    pub duration_seconds: u32,
    pub event_bus: GameEventBus,
    pool: WordPool,
    elapsed_seconds: f64,
    // Definition of the word currently on screen, if it already arrived
    prefetched_meaning: Option<(String, String)>,
}

impl GameSession {
    pub fn new(
        player_name: impl Into<String>,
        duration_seconds: u32,
        difficulty: Difficulty,
        pool: WordPool,
    ) -> Result<Self> {
        validate_duration(duration_seconds)?;

        Ok(Self {
            id: Uuid::new_v4(),
            state: GameState::new(duration_seconds, difficulty),
            player_name: player_name.into(),
            duration_seconds,
            event_bus: GameEventBus::new(),
            pool,
            elapsed_seconds: 0.0,
            prefetched_meaning: None,
        })
    }

    /// Draw the first word and begin counting elapsed time
    pub fn start(&mut self) -> Result<&str> {
        self.state.current_word = self.pool.random_word()?;
        self.elapsed_seconds = 0.0;

        self.event_bus.publish(GameEvent::SessionStarted {
            session_id: self.id,
            duration_seconds: self.duration_seconds,
            difficulty: self.state.difficulty,
        });

        Ok(&self.state.current_word)
    }

    pub fn is_started(&self) -> bool {
        !self.state.current_word.is_empty()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    /// Advance the session by `elapsed_seconds` of real time
    pub fn tick(&mut self, elapsed_seconds: f64) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Finished;
        }

        let elapsed_seconds = elapsed_seconds.max(0.0);
        let decay_rate = tuning(self.state.difficulty).decay_rate;

        self.elapsed_seconds += elapsed_seconds;
        self.state.time_left = (self.state.time_left - elapsed_seconds * decay_rate).max(0.0);
        self.state.wpm = words_per_minute(self.state.score, self.elapsed_seconds);

        if self.state.time_left <= GAME_OVER_EPSILON {
            self.state.game_over = true;
            self.state.time_left = 0.0;

            let entry = self.score_entry();
            self.event_bus.publish(GameEvent::GameOver {
                session_id: self.id,
                entry: entry.clone(),
                finished_at: chrono::Utc::now(),
            });

            return TickOutcome::GameOver(entry);
        }

        TickOutcome::Running
    }

    /// Apply the input field's new value
    pub fn on_input(&mut self, new_value: &str) -> Result<InputOutcome> {
        if self.state.game_over || !self.is_started() {
            return Ok(InputOutcome::Ignored);
        }

        let settings = tuning(self.state.difficulty);
        let mut penalty = None;

        if !self.state.current_word.starts_with(new_value) {
            self.state.time_left = (self.state.time_left - settings.wrong_char_penalty).max(0.0);
            penalty = Some(settings.wrong_char_penalty);

            self.event_bus.publish(GameEvent::TimePenalty {
                session_id: self.id,
                penalty: settings.wrong_char_penalty,
                time_left: self.state.time_left,
            });
        }

        if new_value == self.state.current_word {
            let next_word = self.pool.random_word()?;
            let word = std::mem::replace(&mut self.state.current_word, next_word.clone());

            let meaning = match self.prefetched_meaning.take() {
                Some((prefetched_word, meaning)) if prefetched_word == word => Some(meaning),
                _ => None,
            };

            self.state.score += 1;
            self.state.time_left =
                (self.state.time_left + settings.time_bonus).min(self.duration_seconds as f64);
            self.state.input.clear();
            self.state.wpm = words_per_minute(self.state.score, self.elapsed_seconds);
            self.state.typed_words.push(TypedWord {
                word: word.clone(),
                meaning,
            });

            self.event_bus.publish(GameEvent::WordCompleted {
                session_id: self.id,
                word: word.clone(),
                score: self.state.score,
            });

            return Ok(InputOutcome::WordCompleted { word, next_word });
        }

        self.state.input = new_value.to_string();

        Ok(match penalty {
            Some(penalty) => InputOutcome::Mistyped { penalty },
            None => InputOutcome::Typing,
        })
    }

    /// Record a definition that arrived after its lookup was started
    pub fn resolve_meaning(&mut self, word: &str, meaning: impl Into<String>) {
        let meaning = meaning.into();

        for typed in self
            .state
            .typed_words
            .iter_mut()
            .filter(|typed| typed.word == word && typed.meaning.is_none())
        {
            typed.meaning = Some(meaning.clone());
        }

        if self.state.current_word == word {
            self.prefetched_meaning = Some((word.to_string(), meaning));
        }
    }

    /// Start over with fresh state, keeping the player name and word pool
    pub fn reset(&mut self, duration_seconds: u32, difficulty: Difficulty) -> Result<()> {
        validate_duration(duration_seconds)?;

        self.id = Uuid::new_v4();
        self.state = GameState::new(duration_seconds, difficulty);
        self.duration_seconds = duration_seconds;
        self.elapsed_seconds = 0.0;
        self.prefetched_meaning = None;

        Ok(())
    }

    pub fn score_entry(&self) -> ScoreEntry {
        ScoreEntry {
            player_name: self.player_name.clone(),
            score: self.state.score,
            wpm: self.state.wpm,
            difficulty: self.state.difficulty,
            time: self.duration_seconds,
        }
    }

    /// Fraction of the session duration still remaining, in [0, 1]
    pub fn progress(&self) -> f64 {
        (self.state.time_left / self.duration_seconds as f64).clamp(0.0, 1.0)
    }

    /// Per-character feedback for the word on screen
    pub fn letter_states(&self) -> Vec<(char, LetterStatus)> {
        let mut typed = self.state.input.chars();

        self.state
            .current_word
            .chars()
            .map(|expected| match typed.next() {
                Some(actual) if actual == expected => (expected, LetterStatus::Correct),
                Some(_) => (expected, LetterStatus::Wrong),
                None => (expected, LetterStatus::Pending),
            })
            .collect()
    }

    /// Typed words without repeats, in the order first typed
    pub fn unique_typed_words(&self) -> Vec<&TypedWord> {
        let mut seen = std::collections::HashSet::new();
        self.state
            .typed_words
            .iter()
            .filter(|typed| seen.insert(typed.word.as_str()))
            .collect()
    }
}

fn validate_duration(seconds: u32) -> Result<(), GameError> {
    if seconds == 0 {
        return Err(GameError::InvalidDuration { seconds });
    }
    Ok(())
}
