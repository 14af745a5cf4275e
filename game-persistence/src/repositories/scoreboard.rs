use game_types::{Difficulty, RankedScore, ScoreEntry};
use std::sync::Arc;

use crate::store::{KeyValueStore, StoreError};

pub const SCORES_KEY: &str = "scores";

/// How many entries the persisted list keeps
pub const MAX_STORED_SCORES: usize = 15;

/// How many entries a filtered view shows
pub const MAX_DISPLAYED_SCORES: usize = 10;

/// Local leaderboard kept as a JSON array under one key
pub struct Scoreboard {
    store: Arc<dyn KeyValueStore>,
}

impl Scoreboard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the stored list; absent or malformed data reads as empty
    pub async fn load(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let Some(raw) = self.store.get(SCORES_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<ScoreEntry>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!("Ignoring malformed score list: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Append an entry, keep the best scores and persist them
    pub async fn save(&self, entry: ScoreEntry) -> Result<Vec<ScoreEntry>, StoreError> {
        let mut entries = self.load().await?;
        entries.push(entry);
        sort_by_score(&mut entries);
        entries.truncate(MAX_STORED_SCORES);

        let raw = serde_json::to_string(&entries)?;
        self.store.set(SCORES_KEY, &raw).await?;

        tracing::debug!("Score list now holds {} entries", entries.len());
        Ok(entries)
    }

    pub async fn filter(
        &self,
        difficulty: Option<Difficulty>,
        duration: Option<u32>,
    ) -> Result<Vec<ScoreEntry>, StoreError> {
        let entries = self.load().await?;
        Ok(filter_scores(entries, difficulty, duration))
    }

    pub async fn ranked(
        &self,
        difficulty: Option<Difficulty>,
        duration: Option<u32>,
    ) -> Result<Vec<RankedScore>, StoreError> {
        let entries = self.filter(difficulty, duration).await?;
        Ok(rank_scores(entries))
    }
}

/// Highest score first; ties keep their existing order
pub fn sort_by_score(entries: &mut [ScoreEntry]) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}

pub fn filter_scores(
    entries: Vec<ScoreEntry>,
    difficulty: Option<Difficulty>,
    duration: Option<u32>,
) -> Vec<ScoreEntry> {
    let mut matching: Vec<ScoreEntry> = entries
        .into_iter()
        .filter(|entry| difficulty.is_none_or(|d| entry.difficulty == d))
        .filter(|entry| duration.is_none_or(|t| entry.time == t))
        .collect();

    sort_by_score(&mut matching);
    matching.truncate(MAX_DISPLAYED_SCORES);
    matching
}

pub fn rank_scores(entries: Vec<ScoreEntry>) -> Vec<RankedScore> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| RankedScore {
            rank: (index + 1) as u32,
            entry,
        })
        .collect()
}
