use crate::entity::Snapshot;
use chrono::Utc;
use log::info;
use sqlx::{postgres::PgQueryResult, Error as SqlxError, PgPool, Row};

// Get the last stored snapshot for a coin
pub async fn get_snapshot(pool: &PgPool, coin_id: &str) -> Result<Option<Snapshot>, SqlxError> {
    let row = sqlx::query(
        "SELECT price, market_cap, volume_24h FROM price_snapshots WHERE coin_id = $1",
    )
    .bind(coin_id)
    .fetch_optional(pool)
    .await?;

    let snapshot = match row {
        Some(row) => Some(Snapshot {
            price: row.try_get("price")?,
            market_cap: row.try_get("market_cap")?,
            volume_24h: row.try_get("volume_24h")?,
        }),
        None => None,
    };

    Ok(snapshot)
}

// Replace the stored snapshot for a coin
pub async fn save_snapshot(
    pool: &PgPool,
    coin_id: &str,
    snapshot: &Snapshot,
) -> Result<PgQueryResult, SqlxError> {
    let result = sqlx::query(
        "INSERT INTO price_snapshots (coin_id, price, market_cap, volume_24h, updated_at) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (coin_id) DO UPDATE SET \
         price = EXCLUDED.price, market_cap = EXCLUDED.market_cap, \
         volume_24h = EXCLUDED.volume_24h, updated_at = EXCLUDED.updated_at",
    )
    .bind(coin_id)
    .bind(snapshot.price)
    .bind(snapshot.market_cap)
    .bind(snapshot.volume_24h)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    info!("Saved snapshot for coin: {}", coin_id);

    Ok(result)
}
