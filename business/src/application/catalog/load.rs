use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductSource;

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn ProductSource>,
    pub store: CatalogStore,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> usize {
        self.logger.info("Loading catalog from product source");

        let products = match self.source.get_catalog().await {
            Ok(products) => products,
            Err(err) => {
                self.logger
                    .error(&format!("Failed to load catalog: {}", err));
                Vec::new()
            }
        };

        let count = products.len();
        self.store.finish_loading(products).await;

        self.logger
            .info(&format!("Catalog ready with {} products", count));
        count
    }
}
