use std::env;

use business::domain::catalog::pagination::DEFAULT_PAGE_SIZE;
use business::domain::catalog::settings::CatalogSettings;
use business::domain::pricing::price_view::ClosedWindowPrice;

const DEFAULT_UTC_OFFSET_HOURS: i32 = -6;

/// Catalog presentation settings and the store's time zone.
#[derive(Debug, Clone, Copy)]
pub struct StorefrontConfig {
    pub catalog: CatalogSettings,
    pub utc_offset_hours: i32,
}

impl StorefrontConfig {
    /// Environment variables:
    /// - CATALOG_PAGE_SIZE: products per page, at least 1 (default: 12)
    /// - CLOSED_WINDOW_PRICE: "local" or "live" (default: "local")
    /// - STORE_UTC_OFFSET_HOURS: offset used for the live window (default: -6)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let page_size = lookup("CATALOG_PAGE_SIZE")
            .and_then(|size| size.trim().parse::<usize>().ok())
            .filter(|size| *size >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let closed_window_price = lookup("CLOSED_WINDOW_PRICE")
            .and_then(|price| price.trim().to_lowercase().parse::<ClosedWindowPrice>().ok())
            .unwrap_or_default();
        let utc_offset_hours = lookup("STORE_UTC_OFFSET_HOURS")
            .and_then(|hours| hours.trim().parse::<i32>().ok())
            .unwrap_or(DEFAULT_UTC_OFFSET_HOURS);

        Self {
            catalog: CatalogSettings {
                page_size,
                closed_window_price,
            },
            utc_offset_hours,
        }
    }
}
