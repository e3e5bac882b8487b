use async_trait::async_trait;

use crate::domain::errors::SourceError;

use super::model::{NewProduct, Product};
use super::value_objects::ProductCode;

/// Remote owner of the product catalog.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Full catalog in the order the source returns it.
    async fn get_catalog(&self) -> Result<Vec<Product>, SourceError>;
    /// Registers a product; the source generates and returns its code.
    async fn register(&self, product: &NewProduct) -> Result<ProductCode, SourceError>;
}
