use async_trait::async_trait;

use business::domain::errors::SourceError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::repository::ProductSource;
use business::domain::product::value_objects::ProductCode;

use crate::client::RemoteApiClient;
use crate::dto::{CreatedProductDto, ErrorDto, NewProductDto, ProductDto};

pub struct ProductSourceRemote {
    client: RemoteApiClient,
}

impl ProductSourceRemote {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }

    async fn rejection(response: reqwest::Response) -> SourceError {
        let status = response.status();
        let message = response
            .json::<ErrorDto>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.trim().is_empty());

        SourceError::rejected(message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        }))
    }
}

#[async_trait]
impl ProductSource for ProductSourceRemote {
    async fn get_catalog(&self) -> Result<Vec<Product>, SourceError> {
        let response = self
            .client
            .client
            .get(self.client.catalog_url())
            .send()
            .await
            .map_err(|_| SourceError::unavailable())?;

        if !response.status().is_success() {
            return Err(SourceError::unavailable());
        }

        let products: Vec<ProductDto> = response
            .json()
            .await
            .map_err(|_| SourceError::invalid_response())?;

        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn register(&self, product: &NewProduct) -> Result<ProductCode, SourceError> {
        let response = self
            .client
            .client
            .post(self.client.products_url())
            .json(&NewProductDto::from(product))
            .send()
            .await
            .map_err(|_| SourceError::unavailable())?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let created: CreatedProductDto = response
            .json()
            .await
            .map_err(|_| SourceError::invalid_response())?;

        Ok(ProductCode::new(created.codigo))
    }
}
