use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category_rule::errors::CategoryRuleError;
use crate::domain::category_rule::model::find_rule;
use crate::domain::category_rule::repository::CategoryRuleSource;
use crate::domain::category_rule::selection::RegistrationSelection;
use crate::domain::category_rule::use_cases::update_selection::{
    SelectionPreview, UpdateSelectionParams, UpdateSelectionUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateSelectionUseCaseImpl {
    pub source: Arc<dyn CategoryRuleSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSelectionUseCase for UpdateSelectionUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateSelectionParams,
    ) -> Result<SelectionPreview, CategoryRuleError> {
        let rules = self.source.get_all().await.map_err(|e| {
            self.logger
                .error(&format!("Failed to fetch category rules: {}", e));
            CategoryRuleError::from(e)
        })?;

        if rules.is_empty() {
            return Err(CategoryRuleError::NoneFound);
        }

        let current = params
            .selection
            .unwrap_or_else(|| RegistrationSelection::initial(&rules));

        let selection = match params.change {
            Some(change) => current.apply(change, &rules),
            None => current,
        };

        let subcategories = find_rule(&rules, &selection.base)
            .map(|rule| rule.subcategories.clone())
            .unwrap_or_default();

        Ok(SelectionPreview {
            code_preview: selection.code_preview(&rules),
            subcategories,
            selection,
        })
    }
}
