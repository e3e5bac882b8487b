use async_trait::async_trait;

use crate::domain::category_rule::errors::CategoryRuleError;
use crate::domain::category_rule::model::CategoryRule;

#[async_trait]
pub trait GetCategoryRulesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CategoryRule>, CategoryRuleError>;
}
