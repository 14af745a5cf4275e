pub mod errors;
pub mod game;
pub mod score;
pub mod settings;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use score::*;
pub use settings::*;

pub type SessionId = uuid::Uuid;
