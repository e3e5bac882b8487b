use async_trait::async_trait;

use crate::domain::errors::SourceError;

use super::model::CategoryRule;

/// Remote owner of the categorisation rules used to build product codes.
#[async_trait]
pub trait CategoryRuleSource: Send + Sync {
    async fn get_all(&self) -> Result<Vec<CategoryRule>, SourceError>;
}
