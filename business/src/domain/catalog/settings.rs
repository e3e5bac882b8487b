use crate::domain::pricing::price_view::{ClosedWindowPrice, PricePresenter};

use super::pagination::DEFAULT_PAGE_SIZE;

/// Storefront knobs shared by every catalog use case.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSettings {
    pub page_size: usize,
    pub closed_window_price: ClosedWindowPrice,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            closed_window_price: ClosedWindowPrice::default(),
        }
    }
}

impl CatalogSettings {
    pub fn presenter(&self) -> PricePresenter {
        PricePresenter::new(self.closed_window_price)
    }
}
