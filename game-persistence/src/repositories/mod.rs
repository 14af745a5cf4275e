pub mod preferences;
pub mod scoreboard;

pub use preferences::*;
pub use scoreboard::*;
