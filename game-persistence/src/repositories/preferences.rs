use game_types::ColorScheme;
use std::sync::Arc;

use crate::store::{KeyValueStore, StoreError};

pub const PLAYER_NAME_KEY: &str = "playerName";
pub const COLOR_SCHEME_KEY: &str = "colorScheme";
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Player name and colour scheme, stored as plain strings
pub struct Preferences {
    store: Arc<dyn KeyValueStore>,
}

impl Preferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn player_name(&self) -> Result<String, StoreError> {
        let name = self.store.get(PLAYER_NAME_KEY).await?;
        Ok(name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()))
    }

    pub async fn set_player_name(&self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidValue {
                key: PLAYER_NAME_KEY.to_string(),
            });
        }
        self.store.set(PLAYER_NAME_KEY, name).await
    }

    pub async fn color_scheme(&self) -> Result<ColorScheme, StoreError> {
        let raw = self.store.get(COLOR_SCHEME_KEY).await?;
        Ok(match raw {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Falling back to system color scheme: {}", e);
                ColorScheme::System
            }),
            None => ColorScheme::System,
        })
    }

    pub async fn set_color_scheme(&self, scheme: ColorScheme) -> Result<(), StoreError> {
        self.store.set(COLOR_SCHEME_KEY, scheme.as_str()).await
    }
}
