use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP client for the remote product API.
#[derive(Debug, Clone)]
pub struct RemoteApiClient {
    pub client: Client,
    pub base_url: String,
}

impl RemoteApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the public catalog endpoint URL.
    pub fn catalog_url(&self) -> String {
        format!("{}/api/productos/catalogo", self.base_url)
    }

    /// Returns the product registration endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/api/productos", self.base_url)
    }

    /// Returns the categorisation rules endpoint URL.
    pub fn rules_url(&self) -> String {
        format!("{}/api/reglas", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_urls_from_base() {
        let client = RemoteApiClient::new("https://api.example.com", DEFAULT_TIMEOUT_SECS);

        assert_eq!(client.catalog_url(), "https://api.example.com/api/productos/catalogo");
        assert_eq!(client.products_url(), "https://api.example.com/api/productos");
        assert_eq!(client.rules_url(), "https://api.example.com/api/reglas");
    }

    #[test]
    fn should_drop_trailing_slash_from_base() {
        let client = RemoteApiClient::new("http://localhost:3000/", 5);

        assert_eq!(client.rules_url(), "http://localhost:3000/api/reglas");
    }
}
