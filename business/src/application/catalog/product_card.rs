use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::settings::CatalogSettings;
use crate::domain::catalog::use_cases::product_card::{
    GetProductCardParams, GetProductCardUseCase,
};
use crate::domain::clock::Clock;
use crate::domain::logger::Logger;
use crate::domain::product::card::CardView;
use crate::domain::product::carousel::Carousel;

pub struct GetProductCardUseCaseImpl {
    pub store: CatalogStore,
    pub clock: Arc<dyn Clock>,
    pub settings: CatalogSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductCardUseCase for GetProductCardUseCaseImpl {
    async fn execute(&self, params: GetProductCardParams) -> CardView {
        let snapshot = self.store.read().await;

        let product = snapshot
            .products
            .iter()
            .find(|product| product.code == params.code);

        if product.is_none() && !snapshot.loading {
            self.logger
                .warn(&format!("Product {} not found in catalog", params.code));
        }

        let carousel = product
            .map(|product| {
                Carousel::at(product.photos.len(), params.photo_index).apply(params.movement)
            })
            .unwrap_or_else(|| Carousel::new(0));

        let now = self.clock.now();
        CardView::for_product(product, carousel, &self.settings.presenter(), &now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::live_window::LiveWindowState;
    use crate::domain::pricing::price_view::RESERVED_BADGE;
    use crate::domain::product::card::LOADING_CARD_MESSAGE;
    use crate::domain::product::carousel::{CarouselMove, PLACEHOLDER_PHOTO_URL};
    use crate::domain::product::model::Product;
    use crate::domain::product::value_objects::{Money, ProductCode, ProductStatus};
    use chrono::{DateTime, FixedOffset, TimeZone};
    use mockall::mock;
    use std::str::FromStr;

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

    fn sunday_clock() -> Arc<dyn Clock> {
        let now = FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 2, 20, 0, 0)
            .unwrap();
        let mut clock = MockClk::new();
        clock.expect_now().returning(move || now);
        Arc::new(clock)
    }

    fn jacket(photos: usize, reserved: bool) -> Product {
        Product::from_repository(
            ProductCode::new("J-CCHA-0042"),
            "Chamarra de mezclilla".to_string(),
            "CABALLERO".to_string(),
            "CHAMARRAS".to_string(),
            vec!["M".to_string(), "L".to_string()],
            (0..photos)
                .map(|i| format!("https://img.example.com/chamarra-{}.jpg", i))
                .collect(),
            Money::from_str("450").unwrap(),
            Money::from_str("380").unwrap(),
            ProductStatus::Available,
            reserved,
        )
    }

    async fn loaded_use_case(
        products: Vec<Product>,
        logger: Arc<dyn Logger>,
    ) -> GetProductCardUseCaseImpl {
        let store = CatalogStore::new();
        store.finish_loading(products).await;
        GetProductCardUseCaseImpl {
            store,
            clock: sunday_clock(),
            settings: CatalogSettings::default(),
            logger,
        }
    }

    fn params(code: &str, photo_index: usize, movement: CarouselMove) -> GetProductCardParams {
        GetProductCardParams {
            code: ProductCode::new(code),
            photo_index,
            movement,
        }
    }

    #[tokio::test]
    async fn should_build_card_with_live_bid_and_reserved_badge() {
        let use_case = loaded_use_case(vec![jacket(1, true)], mock_logger()).await;

        let view = use_case
            .execute(params("J-CCHA-0042", 0, CarouselMove::Stay))
            .await;

        let CardView::Ready(card) = view else {
            panic!("expected a ready card");
        };
        assert_eq!(card.short_code, "CCHA 42");
        assert_eq!(card.sizes, "M, L");
        assert_eq!(card.price.window, LiveWindowState::Open);
        assert_eq!(card.price.price.to_string(), "$450.00");
        assert!(card.price.struck_through);
        assert_eq!(card.price.badge.as_deref(), Some(RESERVED_BADGE));
        assert_eq!(card.price.bid.as_ref().unwrap().price.to_string(), "$380.00");
        assert!(!card.carousel_controls);
    }

    #[tokio::test]
    async fn should_wrap_carousel_forward_from_last_photo() {
        let use_case = loaded_use_case(vec![jacket(3, false)], mock_logger()).await;

        let view = use_case
            .execute(params("J-CCHA-0042", 2, CarouselMove::Next))
            .await;

        let CardView::Ready(card) = view else {
            panic!("expected a ready card");
        };
        assert_eq!(card.photo_index, 0);
        assert_eq!(card.image_url, "https://img.example.com/chamarra-0.jpg");
        assert_eq!(card.carousel_indicator.as_deref(), Some("1 / 3"));
    }

    #[tokio::test]
    async fn should_show_placeholder_photo_when_product_has_none() {
        let use_case = loaded_use_case(vec![jacket(0, false)], mock_logger()).await;

        let view = use_case
            .execute(params("J-CCHA-0042", 5, CarouselMove::Prev))
            .await;

        let CardView::Ready(card) = view else {
            panic!("expected a ready card");
        };
        assert_eq!(card.image_url, PLACEHOLDER_PHOTO_URL);
        assert_eq!(card.photo_index, 0);
        assert!(card.carousel_indicator.is_none());
    }

    #[tokio::test]
    async fn should_warn_and_show_loading_card_for_unknown_code() {
        let mut logger = MockLog::new();
        logger.expect_warn().times(1).returning(|_| ());
        let use_case = loaded_use_case(vec![jacket(1, false)], Arc::new(logger)).await;

        let view = use_case
            .execute(params("Z-DZAP-0001", 0, CarouselMove::Stay))
            .await;

        assert_eq!(
            view,
            CardView::Loading {
                message: LOADING_CARD_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn should_show_loading_card_without_warning_while_catalog_loads() {
        let mut logger = MockLog::new();
        logger.expect_warn().never();
        let use_case = GetProductCardUseCaseImpl {
            store: CatalogStore::new(),
            clock: sunday_clock(),
            settings: CatalogSettings::default(),
            logger: Arc::new(logger),
        };

        let view = use_case
            .execute(params("J-CCHA-0042", 0, CarouselMove::Stay))
            .await;

        assert_eq!(view, CardView::loading());
    }
}
