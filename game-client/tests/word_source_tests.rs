mod common;

use common::{base_url, spawn_stub_api};
use game_client::word_source::{WordSource, WordSourceError};
use game_core::WordPool;
use game_types::MEANING_FALLBACK;

async fn source_for(word_list_path: &str) -> WordSource {
    let base = base_url(spawn_stub_api().await);
    WordSource::new(
        format!("{}/{}", base, word_list_path),
        format!("{}/entries/en", base),
    )
}

#[tokio::test]
async fn test_fetch_words_keeps_alphabetic_words() {
    let source = source_for("all").await;
    let pool = source.fetch_words().await.unwrap();

    assert_eq!(pool.len(), 3);
    assert!(pool.contains("apple"));
    assert!(pool.contains("cherry"));
    assert!(!pool.contains("x1y"));
}

#[tokio::test]
async fn test_fetch_words_empty_list_is_an_error() {
    let source = source_for("empty").await;
    let result = source.fetch_words().await;
    assert!(matches!(result, Err(WordSourceError::Empty)));
}

#[tokio::test]
async fn test_fetch_words_wrong_shape_is_an_error() {
    let source = source_for("broken").await;
    let result = source.fetch_words().await;
    assert!(matches!(result, Err(WordSourceError::Request(_))));
}

#[tokio::test]
async fn test_fetch_meaning_returns_first_definition() {
    let source = source_for("all").await;
    let meaning = source.fetch_meaning("apple").await;
    assert_eq!(meaning, "A common, round fruit.");
}

#[tokio::test]
async fn test_fetch_meaning_not_found_falls_back() {
    let source = source_for("all").await;
    let meaning = source.fetch_meaning("zzzz").await;
    assert_eq!(meaning, MEANING_FALLBACK);
}

#[tokio::test]
async fn test_fetch_meaning_unexpected_shape_falls_back() {
    let source = source_for("all").await;
    let meaning = source.fetch_meaning("shapeless").await;
    assert_eq!(meaning, MEANING_FALLBACK);
}

#[tokio::test]
async fn test_load_pool_falls_back_on_empty_list() {
    let source = source_for("empty").await;
    let pool = source.load_pool().await;
    assert_eq!(pool.len(), WordPool::builtin().len());
}

#[tokio::test]
async fn test_load_pool_uses_fetched_words() {
    let source = source_for("all").await;
    let pool = source.load_pool().await;
    assert!(pool.contains("banana"));
    assert!(!pool.contains("typescript"));
}
