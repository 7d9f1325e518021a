use anyhow::Result;
use async_trait::async_trait;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StoreCredentials;
use crate::entity::{BotError, Snapshot};
use crate::storage::db;

/// Store holding the most recent snapshot per coin
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Last stored snapshot for the coin, if any
    async fn get(&self, coin_id: &str) -> Result<Option<Snapshot>>;

    /// Overwrite the stored snapshot for the coin
    async fn set(&self, coin_id: &str, snapshot: &Snapshot) -> Result<()>;
}

/// Postgres-backed snapshot store
pub struct PgSnapshotRepository {
    pool: PgPool,
}

impl PgSnapshotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects with the given credentials and applies pending migrations
    pub async fn connect(credentials: &StoreCredentials) -> Result<Self> {
        info!("Connecting to snapshot store...");
        let pool = PgPoolOptions::new()
            .max_connections(credentials.max_connections)
            .connect(&credentials.database_url)
            .await
            .map_err(BotError::Database)?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(BotError::Migration)?;
        info!("Snapshot store migrations completed");

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl SnapshotRepository for PgSnapshotRepository {
    async fn get(&self, coin_id: &str) -> Result<Option<Snapshot>> {
        let snapshot = db::get_snapshot(&self.pool, coin_id)
            .await
            .map_err(BotError::Database)?;
        Ok(snapshot)
    }

    async fn set(&self, coin_id: &str, snapshot: &Snapshot) -> Result<()> {
        db::save_snapshot(&self.pool, coin_id, snapshot)
            .await
            .map_err(BotError::Database)?;
        Ok(())
    }
}
