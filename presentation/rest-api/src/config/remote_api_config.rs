use std::env;

use remote_api::RemoteApiClient;

const DEFAULT_BASE_URL: &str = "https://neni-system-api-production.up.railway.app";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Location of the remote product and category rule API
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl RemoteApiConfig {
    /// Environment variables:
    /// - REMOTE_API_BASE_URL (default: production API)
    /// - REMOTE_API_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("REMOTE_API_BASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = lookup("REMOTE_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_secs,
        }
    }

    pub fn client(&self) -> RemoteApiClient {
        RemoteApiClient::new(self.base_url.clone(), self.timeout_secs)
    }
}
