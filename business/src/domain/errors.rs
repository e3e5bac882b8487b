/// Errors raised by the remote sources (products, category rules).
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source.unavailable")]
    Unavailable,
    #[error("source.invalid_response")]
    InvalidResponse,
    #[error("source.rejected")]
    Rejected(String),
}

impl SourceError {
    pub fn unavailable() -> Self {
        SourceError::Unavailable
    }
    pub fn invalid_response() -> Self {
        SourceError::InvalidResponse
    }
    pub fn rejected(reason: impl Into<String>) -> Self {
        SourceError::Rejected(reason.into())
    }
}
