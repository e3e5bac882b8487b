use super::{
    cors_config, remote_api_config::RemoteApiConfig, server_config::ServerConfig,
    storefront_config::StorefrontConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub remote_api: RemoteApiConfig,
    pub storefront: StorefrontConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            remote_api: RemoteApiConfig::from_env(),
            storefront: StorefrontConfig::from_env(),
        }
    }
}
