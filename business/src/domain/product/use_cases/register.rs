use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::NewProductProps;
use crate::domain::product::value_objects::ProductCode;

pub struct RegisterProductParams {
    pub form: NewProductProps,
}

#[async_trait]
pub trait RegisterProductUseCase: Send + Sync {
    /// Returns the code generated by the product source.
    async fn execute(&self, params: RegisterProductParams) -> Result<ProductCode, ProductError>;
}
