use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::store::{KeyValueStore, MemoryStore, SqliteStore};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://speed_typer.db?mode=rwc";

pub async fn connect_to_database(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

pub async fn connect_to_memory_database() -> Result<DatabaseConnection, DbErr> {
    Database::connect("sqlite::memory:").await
}

/// Open the database and bring its schema up to date
pub async fn connect_and_migrate(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let db = connect_to_database(database_url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("Database ready at {}", database_url);
    Ok(db)
}

/// SQLite store at `database_url`, or an in-memory store when it cannot be opened
pub async fn open_store(database_url: &str) -> Arc<dyn KeyValueStore> {
    match connect_and_migrate(database_url).await {
        Ok(db) => Arc::new(SqliteStore::new(db)),
        Err(e) => {
            tracing::warn!(
                "Failed to open database '{}', scores will not be kept: {}",
                database_url,
                e
            );
            Arc::new(MemoryStore::new())
        }
    }
}
