use anyhow::Result;
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use std::time::Duration;

use crate::entity::{BotError, Snapshot};
use crate::paprika::models::Ticker;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of current market values for a coin
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Fetch price, market cap and 24h volume of `coin_id` quoted in `currency`
    async fn fetch_snapshot(&self, coin_id: &str, currency: &str) -> Result<Snapshot>;
}

/// Price service backed by the CoinPaprika tickers API
pub struct PaprikaPriceService {
    http_client: Client,
    api_url: String,
}

impl PaprikaPriceService {
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(BotError::Http)?;

        Ok(Self {
            http_client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn fetch_ticker(&self, coin_id: &str) -> Result<Ticker, BotError> {
        let url = format!("{}/tickers/{}", self.api_url, coin_id);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            error!("Failed to fetch ticker from price API: {}", e);
            BotError::Http(e)
        })?;

        let status = response.status();
        info!("Price API response: {} for coin {}", status, coin_id);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(BotError::ApiStatus { status, body });
        }

        Ok(response.json::<Ticker>().await?)
    }
}

#[async_trait]
impl PriceService for PaprikaPriceService {
    async fn fetch_snapshot(&self, coin_id: &str, currency: &str) -> Result<Snapshot> {
        let ticker = self.fetch_ticker(coin_id).await?;
        let snapshot = ticker.snapshot(coin_id, currency)?;

        info!(
            "Fetched {} in {}: price={}, market_cap={}, volume_24h={}",
            coin_id, currency, snapshot.price, snapshot.market_cap, snapshot.volume_24h
        );

        Ok(snapshot)
    }
}
