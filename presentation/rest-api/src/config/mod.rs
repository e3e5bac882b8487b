pub mod app_config;
pub mod cors_config;
pub mod remote_api_config;
pub mod server_config;
pub mod storefront_config;
