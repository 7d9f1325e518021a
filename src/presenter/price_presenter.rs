use crate::interactor::price_interactor::PriceInteractor;
use crate::view::price_view::{compose_price_message, PriceView};
use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait PricePresenter: Send + Sync {
    /// Runs one refresh and posts the report, returning the posted text
    async fn publish_price_update(&self) -> Result<String>;
}

pub struct PricePresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    coin_symbol: String,
}

impl<I, V> PricePresenterImpl<I, V>
where
    I: PriceInteractor,
    V: PriceView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, coin_symbol: impl Into<String>) -> Self {
        Self {
            interactor,
            view,
            coin_symbol: coin_symbol.into(),
        }
    }
}

#[async_trait]
impl<I, V> PricePresenter for PricePresenterImpl<I, V>
where
    I: PriceInteractor + Send + Sync,
    V: PriceView + Send + Sync,
{
    async fn publish_price_update(&self) -> Result<String> {
        let update = self.interactor.refresh().await?;
        let message = compose_price_message(&self.coin_symbol, &update);

        info!("Posting price report for {}", update.coin_id);
        self.view.send_report(&message).await?;

        Ok(message)
    }
}
