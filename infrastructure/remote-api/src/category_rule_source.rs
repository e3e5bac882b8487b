use async_trait::async_trait;

use business::domain::category_rule::model::CategoryRule;
use business::domain::category_rule::repository::CategoryRuleSource;
use business::domain::errors::SourceError;

use crate::client::RemoteApiClient;
use crate::dto::CategoryRuleDto;

pub struct CategoryRuleSourceRemote {
    client: RemoteApiClient,
}

impl CategoryRuleSourceRemote {
    pub fn new(client: RemoteApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRuleSource for CategoryRuleSourceRemote {
    async fn get_all(&self) -> Result<Vec<CategoryRule>, SourceError> {
        let response = self
            .client
            .client
            .get(self.client.rules_url())
            .send()
            .await
            .map_err(|_| SourceError::unavailable())?;

        if !response.status().is_success() {
            return Err(SourceError::unavailable());
        }

        let rules: Vec<CategoryRuleDto> = response
            .json()
            .await
            .map_err(|_| SourceError::invalid_response())?;

        Ok(rules.into_iter().map(CategoryRuleDto::into_domain).collect())
    }
}
