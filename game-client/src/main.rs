use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::EnvFilter;

use game_client::{
    app::{self, Services},
    config::Config,
    word_source::WordSource,
};
use game_persistence::{Preferences, Scoreboard, connection::open_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::new();

    // The terminal belongs to the game, so logs go to a file
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Speed Typer...");

    let store = open_store(&config.database_url).await;

    let services = Services {
        word_source: WordSource::from_config(&config),
        scoreboard: Arc::new(Scoreboard::new(store.clone())),
        preferences: Preferences::new(store),
    };

    app::run(config, services).await
}
