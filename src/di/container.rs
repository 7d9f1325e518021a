use std::sync::Arc;

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::interactor::PriceInteractorImpl;
use crate::paprika::{PaprikaPriceService, PriceService};
use crate::presenter::PricePresenterImpl;
use crate::storage::{PgSnapshotRepository, SnapshotRepository};
use crate::view::TelegramPriceView;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    price_service: Arc<dyn PriceService + Send + Sync>,
    snapshot_repository: Option<Arc<dyn SnapshotRepository + Send + Sync>>,
    price_view: Arc<TelegramPriceView>,

    // Configuration
    config: Config,
}

impl ServiceContainer {
    /// Create the container, connecting to the snapshot store when one is configured
    pub async fn new(config: Config) -> Result<Self> {
        let price_service = Arc::new(PaprikaPriceService::new(config.price_api_url.clone())?)
            as Arc<dyn PriceService + Send + Sync>;

        let snapshot_repository = match &config.store {
            Some(credentials) => Some(Arc::new(PgSnapshotRepository::connect(credentials).await?)
                as Arc<dyn SnapshotRepository + Send + Sync>),
            None => {
                info!("No snapshot store configured, deltas will not be computed");
                None
            }
        };

        let price_view = Arc::new(TelegramPriceView::new(
            &config.telegram_api_url,
            &config.bot_token,
            &config.chat_id,
        )?);

        Ok(Self {
            price_service,
            snapshot_repository,
            price_view,
            config,
        })
    }

    // Accessor methods

    pub fn price_service(&self) -> Arc<dyn PriceService + Send + Sync> {
        self.price_service.clone()
    }

    pub fn snapshot_repository(&self) -> Option<Arc<dyn SnapshotRepository + Send + Sync>> {
        self.snapshot_repository.clone()
    }

    pub fn price_view(&self) -> Arc<TelegramPriceView> {
        self.price_view.clone()
    }

    /// Wire the interactor and view into a presenter for the configured coin
    pub fn price_presenter(&self) -> PricePresenterImpl<PriceInteractorImpl, TelegramPriceView> {
        let interactor = Arc::new(PriceInteractorImpl::new(
            self.price_service(),
            self.snapshot_repository(),
            self.config.coin_id.clone(),
            self.config.vs_currency.clone(),
        ));

        PricePresenterImpl::new(interactor, self.price_view(), self.config.coin_symbol.clone())
    }
}
