use async_trait::async_trait;

use crate::domain::catalog::filter::{CategoryFilter, FilterState};
use crate::domain::catalog::view::CatalogView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogAction {
    SelectAudience(CategoryFilter),
    SelectType(CategoryFilter),
    GoToPage(usize),
}

pub struct NavigateCatalogParams {
    pub state: FilterState,
    pub action: CatalogAction,
}

#[async_trait]
pub trait NavigateCatalogUseCase: Send + Sync {
    /// Applies `action` to `state`. Out-of-range pages leave the state as is.
    async fn execute(&self, params: NavigateCatalogParams) -> CatalogView;
}
