use chrono::{DateTime, Utc};
use game_types::{Difficulty, ScoreEntry, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionStarted {
        session_id: SessionId,
        duration_seconds: u32,
        difficulty: Difficulty,
    },
    WordCompleted {
        session_id: SessionId,
        word: String,
        score: u32,
    },
    TimePenalty {
        session_id: SessionId,
        penalty: f64,
        time_left: f64,
    },
    GameOver {
        session_id: SessionId,
        entry: ScoreEntry,
        finished_at: DateTime<Utc>,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::SessionStarted { session_id, .. } => *session_id,
            GameEvent::WordCompleted { session_id, .. } => *session_id,
            GameEvent::TimePenalty { session_id, .. } => *session_id,
            GameEvent::GameOver { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Writes every event to the tracing log
pub struct TracingEventHandler;

impl GameEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::SessionStarted {
                session_id,
                duration_seconds,
                difficulty,
            } => tracing::info!(%session_id, duration_seconds, %difficulty, "Session started"),
            GameEvent::WordCompleted { session_id, word, score } => {
                tracing::debug!(%session_id, word = %word, score, "Word completed")
            }
            GameEvent::TimePenalty {
                session_id,
                penalty,
                time_left,
            } => tracing::trace!(%session_id, penalty, time_left, "Wrong character"),
            GameEvent::GameOver {
                session_id,
                entry,
                finished_at,
            } => tracing::info!(
                %session_id,
                score = entry.score,
                wpm = entry.wpm,
                finished_at = %finished_at.to_rfc3339(),
                "Game over"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct TestHandler {
        events: Arc<Mutex<Vec<GameEvent>>>,
    }

    impl GameEventHandler for TestHandler {
        fn handle_event(&mut self, event: &GameEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_event_bus() {
        let mut bus = GameEventBus::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        bus.add_handler(Box::new(TestHandler {
            events: events.clone(),
        }));
        bus.add_handler(Box::new(TracingEventHandler));
        assert_eq!(bus.handler_count(), 2);

        let session_id = Uuid::new_v4();
        bus.publish(GameEvent::SessionStarted {
            session_id,
            duration_seconds: 30,
            difficulty: Difficulty::Normal,
        });

        let recorded = events.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].session_id(), session_id);
    }

    #[test]
    fn test_publish_without_handlers() {
        let mut bus = GameEventBus::default();
        bus.publish(GameEvent::WordCompleted {
            session_id: Uuid::new_v4(),
            word: "hook".to_string(),
            score: 1,
        });
        assert_eq!(bus.handler_count(), 0);
    }
}
