use crate::entity::PriceUpdate;
use crate::paprika::PriceService;
use crate::storage::SnapshotRepository;
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

#[async_trait]
pub trait PriceInteractor: Send + Sync {
    /// Fetch current values, then swap them with the stored snapshot
    async fn refresh(&self) -> Result<PriceUpdate>;
}

pub struct PriceInteractorImpl {
    price_service: Arc<dyn PriceService + Send + Sync>,
    snapshot_repository: Option<Arc<dyn SnapshotRepository + Send + Sync>>,
    coin_id: String,
    vs_currency: String,
}

impl PriceInteractorImpl {
    pub fn new(
        price_service: Arc<dyn PriceService + Send + Sync>,
        snapshot_repository: Option<Arc<dyn SnapshotRepository + Send + Sync>>,
        coin_id: impl Into<String>,
        vs_currency: impl Into<String>,
    ) -> Self {
        Self {
            price_service,
            snapshot_repository,
            coin_id: coin_id.into(),
            vs_currency: vs_currency.into(),
        }
    }
}

#[async_trait]
impl PriceInteractor for PriceInteractorImpl {
    async fn refresh(&self) -> Result<PriceUpdate> {
        let current = self
            .price_service
            .fetch_snapshot(&self.coin_id, &self.vs_currency)
            .await?;

        // The stored snapshot is replaced before the report goes out
        let previous = match &self.snapshot_repository {
            Some(repository) => {
                let previous = repository.get(&self.coin_id).await?;
                repository.set(&self.coin_id, &current).await?;
                previous
            }
            None => {
                debug!("Snapshot store disabled, no previous values");
                None
            }
        };

        info!(
            "Refreshed {} (previous snapshot: {})",
            self.coin_id,
            if previous.is_some() { "found" } else { "none" }
        );

        Ok(PriceUpdate {
            coin_id: self.coin_id.clone(),
            current,
            previous,
        })
    }
}
