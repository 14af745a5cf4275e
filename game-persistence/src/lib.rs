pub mod connection;
pub mod entities;
pub mod repositories;
pub mod store;

pub use repositories::{Preferences, Scoreboard};
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
