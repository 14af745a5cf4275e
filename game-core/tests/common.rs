#![allow(dead_code)]

use game_core::{GameEvent, GameEventHandler, GameSession, WordPool};
use game_types::Difficulty;
use std::sync::{Arc, Mutex};

/// Creates a test WordPool with a known set of words
pub fn create_test_pool() -> WordPool {
    WordPool::from_words([
        "apple", "banana", "cherry", "tests", "valid", "hello", "world", "house",
    ])
}

/// Creates a started session whose pool holds a single word
pub fn create_single_word_session(
    word: &str,
    duration: u32,
    difficulty: Difficulty,
) -> GameSession {
    let mut session =
        GameSession::new("Tester", duration, difficulty, WordPool::from_words([word])).unwrap();
    session.start().unwrap();
    session
}

/// Creates a started 30s normal session over the test pool
pub fn create_standard_session() -> GameSession {
    let mut session =
        GameSession::new("Tester", 30, Difficulty::Normal, create_test_pool()).unwrap();
    session.start().unwrap();
    session
}

/// Feed `seconds` of idle time in 100ms ticks
pub fn idle_for(session: &mut GameSession, seconds: f64) {
    let ticks = (seconds * 10.0).round() as usize;
    for _ in 0..ticks {
        session.tick(0.1);
    }
}

/// Type the current word one character at a time
pub fn type_current_word(session: &mut GameSession) {
    let word = session.state.current_word.clone();
    let mut typed = String::new();
    for ch in word.chars() {
        typed.push(ch);
        session.on_input(&typed).unwrap();
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
