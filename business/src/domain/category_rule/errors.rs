#[derive(Debug, thiserror::Error)]
pub enum CategoryRuleError {
    #[error("category_rule.none_found")]
    NoneFound,
    #[error(transparent)]
    Source(#[from] crate::domain::errors::SourceError),
}
