use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::settings::CatalogSettings;
use crate::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use crate::domain::catalog::view::CatalogView;
use crate::domain::clock::Clock;
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub store: CatalogStore,
    pub clock: Arc<dyn Clock>,
    pub settings: CatalogSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    async fn execute(&self, params: BrowseCatalogParams) -> CatalogView {
        let snapshot = self.store.read().await;
        let now = self.clock.now();

        self.logger.debug(&format!(
            "Browsing catalog: audience={}, type={}, page={}",
            params.state.audience, params.state.product_type, params.state.page
        ));

        CatalogView::build(
            &snapshot.products,
            snapshot.loading,
            params.state,
            &self.settings,
            &now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::filter::{CategoryFilter, FilterState};
    use crate::domain::pricing::live_window::LiveWindowState;
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::{Money, ProductCode, ProductStatus};
    use chrono::{DateTime, FixedOffset, TimeZone};
    use mockall::mock;

    mock! {
        pub Clk {}

        impl Clock for Clk {
            fn now(&self) -> DateTime<FixedOffset>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn clock_at(day: u32, hour: u32) -> Arc<dyn Clock> {
        let offset = FixedOffset::west_opt(6 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap();
        let mut clock = MockClk::new();
        clock.expect_now().returning(move || now);
        Arc::new(clock)
    }

    fn product(code: &str, audience: &str, product_type: &str) -> Product {
        Product::from_repository(
            ProductCode::new(code),
            "Prenda".to_string(),
            audience.to_string(),
            product_type.to_string(),
            vec![],
            vec![],
            Money::zero(),
            Money::zero(),
            ProductStatus::Available,
            false,
        )
    }

    #[tokio::test]
    async fn should_report_loading_with_empty_page_before_catalog_arrives() {
        let use_case = BrowseCatalogUseCaseImpl {
            store: CatalogStore::new(),
            clock: clock_at(5, 12),
            settings: CatalogSettings::default(),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(BrowseCatalogParams {
                state: FilterState::new(),
            })
            .await;

        assert!(view.loading);
        assert!(view.cards.is_empty());
        assert_eq!(view.total_pages, 0);
        assert!(!view.no_results);
    }

    #[tokio::test]
    async fn should_filter_loaded_catalog_and_price_at_clock_instant() {
        let store = CatalogStore::new();
        store
            .finish_loading(vec![
                product("Z-DZAP-0001", "DAMA", "ZAPATOS"),
                product("Z-CZAP-0002", "CABALLERO", "ZAPATOS"),
                product("Z-DROP-0003", "DAMA", "ROPA"),
            ])
            .await;

        let use_case = BrowseCatalogUseCaseImpl {
            store,
            clock: clock_at(1, 10),
            settings: CatalogSettings::default(),
            logger: mock_logger(),
        };

        let view = use_case
            .execute(BrowseCatalogParams {
                state: FilterState::new().select_audience(CategoryFilter::only("DAMA")),
            })
            .await;

        assert!(!view.loading);
        assert_eq!(view.total_products, 3);
        assert_eq!(view.total_matches, 2);
        assert_eq!(view.cards[0].code, "Z-DZAP-0001");
        assert_eq!(view.cards[1].code, "Z-DROP-0003");
        assert_eq!(view.cards[0].price.window, LiveWindowState::Open);
    }
}
