use async_trait::async_trait;

use crate::domain::category_rule::errors::CategoryRuleError;
use crate::domain::category_rule::model::SubcategoryRule;
use crate::domain::category_rule::selection::{RegistrationSelection, SelectionChange};

pub struct UpdateSelectionParams {
    /// `None` starts from the initial selection.
    pub selection: Option<RegistrationSelection>,
    pub change: Option<SelectionChange>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPreview {
    pub selection: RegistrationSelection,
    pub code_preview: String,
    /// Subcategories offered for the selected base.
    pub subcategories: Vec<SubcategoryRule>,
}

#[async_trait]
pub trait UpdateSelectionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateSelectionParams,
    ) -> Result<SelectionPreview, CategoryRuleError>;
}
