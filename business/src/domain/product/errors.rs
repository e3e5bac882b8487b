#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.classification_missing")]
    ClassificationMissing,
    #[error("product.unknown_owner")]
    UnknownOwner,
    #[error("product.description_empty")]
    DescriptionEmpty,
    #[error("product.invalid_quantity")]
    InvalidQuantity,
    #[error("product.invalid_price")]
    InvalidPrice,
    #[error("product.invalid_photo_url")]
    InvalidPhotoUrl,
    #[error("product.invalid_status")]
    InvalidStatus,
    #[error(transparent)]
    Source(#[from] crate::domain::errors::SourceError),
}
