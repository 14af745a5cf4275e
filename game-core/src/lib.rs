pub mod game_config;
pub mod game_events;
pub mod game_state;
pub mod word_pool;
pub mod wpm;

// Re-export main components
pub use game_config::*;
pub use game_events::*;
pub use game_state::*;
pub use word_pool::*;
pub use wpm::*;
