use async_trait::async_trait;

use crate::domain::catalog::filter::FilterState;
use crate::domain::catalog::view::CatalogView;

pub struct BrowseCatalogParams {
    pub state: FilterState,
}

#[async_trait]
pub trait BrowseCatalogUseCase: Send + Sync {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogView;
}
