use game_core::WordPool;
use game_types::MEANING_FALLBACK;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("Word list request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Word list contained no usable words")]
    Empty,
}

/// Client for the word-list and dictionary APIs
#[derive(Debug, Clone)]
pub struct WordSource {
    client: Client,
    word_list_url: String,
    dictionary_url: String,
}

impl WordSource {
    pub fn new(word_list_url: impl Into<String>, dictionary_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            word_list_url: word_list_url.into(),
            dictionary_url: dictionary_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.word_list_url.clone(), config.dictionary_url.clone())
    }

    pub async fn fetch_words(&self) -> Result<WordPool, WordSourceError> {
        tracing::info!("Fetching word list from {}", self.word_list_url);

        let words: Vec<String> = self
            .client
            .get(&self.word_list_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let pool = WordPool::from_words(words);
        if pool.is_empty() {
            return Err(WordSourceError::Empty);
        }

        tracing::info!("Loaded {} words", pool.len());
        Ok(pool)
    }

    /// Fetched word list, or the built-in list when the fetch fails
    pub async fn load_pool(&self) -> WordPool {
        self.fetch_words().await.unwrap_or_else(|e| {
            tracing::warn!("Using built-in word list: {}", e);
            WordPool::builtin()
        })
    }

    /// First dictionary definition of `word`, or the fallback text on any failure
    pub async fn fetch_meaning(&self, word: &str) -> String {
        match self.lookup_definition(word).await {
            Ok(Some(definition)) => definition,
            Ok(None) => {
                tracing::warn!("Unexpected dictionary response for '{}'", word);
                MEANING_FALLBACK.to_string()
            }
            Err(e) => {
                tracing::warn!("Error fetching word meaning for '{}': {}", word, e);
                MEANING_FALLBACK.to_string()
            }
        }
    }

    async fn lookup_definition(&self, word: &str) -> Result<Option<String>, reqwest::Error> {
        let url = format!("{}/{}", self.dictionary_url.trim_end_matches('/'), word);
        let body: Value = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(extract_definition(&body))
    }
}

/// Pull `[0].meanings[0].definitions[0].definition` out of a dictionary entry
pub fn extract_definition(body: &Value) -> Option<String> {
    body.pointer("/0/meanings/0/definitions/0/definition")
        .and_then(Value::as_str)
        .map(str::to_string)
}
