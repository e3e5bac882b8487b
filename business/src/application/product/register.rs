use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::NewProduct;
use crate::domain::product::repository::ProductSource;
use crate::domain::product::use_cases::register::{RegisterProductParams, RegisterProductUseCase};
use crate::domain::product::value_objects::ProductCode;

pub struct RegisterProductUseCaseImpl {
    pub source: Arc<dyn ProductSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterProductUseCase for RegisterProductUseCaseImpl {
    async fn execute(&self, params: RegisterProductParams) -> Result<ProductCode, ProductError> {
        let product = NewProduct::new(params.form).map_err(|e| {
            self.logger
                .warn(&format!("Rejected product registration: {}", e));
            e
        })?;

        let code = self.source.register(&product).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to register product: {}", e));
            ProductError::from(e)
        })?;

        self.logger.info(&format!(
            "Registered product {} for owner {}",
            code, product.owner
        ));
        Ok(code)
    }
}
