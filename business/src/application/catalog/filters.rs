use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::filters::{CatalogFilters, GetCatalogFiltersUseCase};
use crate::domain::category_rule::errors::CategoryRuleError;
use crate::domain::category_rule::model::{audience_options, type_options};
use crate::domain::category_rule::repository::CategoryRuleSource;
use crate::domain::logger::Logger;

pub struct GetCatalogFiltersUseCaseImpl {
    pub rule_source: Arc<dyn CategoryRuleSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCatalogFiltersUseCase for GetCatalogFiltersUseCaseImpl {
    async fn execute(&self) -> Result<CatalogFilters, CategoryRuleError> {
        let rules = self.rule_source.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch category rules: {}", e));
            CategoryRuleError::from(e)
        })?;

        Ok(CatalogFilters {
            audiences: audience_options(&rules),
            types: type_options(&rules),
        })
    }
}
