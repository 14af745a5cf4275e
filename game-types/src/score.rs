use serde::{Deserialize, Serialize};

use crate::Difficulty;

/// One finished session as stored on the local leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub player_name: String,
    pub score: u32,
    pub wpm: u32,
    pub difficulty: Difficulty,
    pub time: u32, // configured session length in seconds
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScore {
    pub rank: u32,
    pub entry: ScoreEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_entry_field_names() {
        let entry = ScoreEntry {
            player_name: "Ada".to_string(),
            score: 12,
            wpm: 40,
            difficulty: Difficulty::Hard,
            time: 60,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["playerName"], "Ada");
        assert_eq!(value["difficulty"], "hard");
        assert_eq!(value["time"], 60);
    }
}
