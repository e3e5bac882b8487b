use async_trait::async_trait;

use crate::domain::category_rule::errors::CategoryRuleError;

/// Values offered by the two filter rows, without the show-all entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilters {
    pub audiences: Vec<String>,
    pub types: Vec<String>,
}

#[async_trait]
pub trait GetCatalogFiltersUseCase: Send + Sync {
    async fn execute(&self) -> Result<CatalogFilters, CategoryRuleError>;
}
