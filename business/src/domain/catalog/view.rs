use chrono::{Datelike, Timelike};

use crate::domain::product::card::ProductCard;
use crate::domain::product::carousel::Carousel;
use crate::domain::product::model::Product;

use super::filter::FilterState;
use super::pagination::{is_no_results, paginate_state};
use super::settings::CatalogSettings;

/// What the storefront renders for one catalog request.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub state: FilterState,
    pub loading: bool,
    /// Size of the whole catalog, before filtering.
    pub total_products: usize,
    pub total_matches: usize,
    pub total_pages: usize,
    pub no_results: bool,
    /// Set when a page change was accepted; the client should scroll to the top.
    pub scroll_to_top: bool,
    pub cards: Vec<ProductCard>,
}

impl CatalogView {
    pub fn build<T: Datelike + Timelike>(
        products: &[Product],
        loading: bool,
        state: FilterState,
        settings: &CatalogSettings,
        now: &T,
    ) -> Self {
        let page = paginate_state(products, &state, settings.page_size);
        let presenter = settings.presenter();

        let cards = page
            .items
            .iter()
            .map(|product| {
                ProductCard::build(
                    product,
                    Carousel::new(product.photos.len()),
                    &presenter,
                    now,
                )
            })
            .collect();

        Self {
            loading,
            total_products: products.len(),
            total_matches: page.total_matches,
            total_pages: page.total_pages,
            no_results: is_no_results(page.total_matches, &state),
            scroll_to_top: false,
            cards,
            state,
        }
    }

    pub fn with_scroll_to_top(self, scroll_to_top: bool) -> Self {
        Self {
            scroll_to_top,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::filter::CategoryFilter;
    use crate::domain::pricing::live_window::LiveWindowState;
    use crate::domain::product::value_objects::{Money, ProductCode, ProductStatus};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn product(code: &str, audience: &str) -> Product {
        Product {
            code: ProductCode::new(code),
            description: "Blusa".to_string(),
            audience_category: audience.to_string(),
            type_category: "ROPA".to_string(),
            sizes: vec!["M".to_string()],
            photos: vec!["https://img.example.com/blusa.jpg".to_string()],
            local_price: Money::from_str("120").unwrap(),
            live_price: Money::from_str("90").unwrap(),
            status: ProductStatus::Available,
            reserved: false,
        }
    }

    #[test]
    fn should_build_cards_for_current_page_only() {
        let products: Vec<Product> = (0..5)
            .map(|i| product(&format!("C-DROP-{:04}", i), "DAMA"))
            .collect();
        let settings = CatalogSettings {
            page_size: 2,
            ..CatalogSettings::default()
        };
        let monday = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let state = FilterState::new().go_to_page(3, 3).unwrap();

        let view = CatalogView::build(&products, false, state, &settings, &monday);

        assert_eq!(view.total_products, 5);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].code, "C-DROP-0004");
        assert_eq!(view.cards[0].price.window, LiveWindowState::Open);
        assert!(!view.scroll_to_top);
    }

    #[test]
    fn should_flag_no_results_for_filtered_empty_match() {
        let products = vec![product("C-DROP-0001", "DAMA")];
        let friday = NaiveDate::from_ymd_opt(2024, 6, 7)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        let state = FilterState::new().select_audience(CategoryFilter::only("INFANTIL"));

        let view = CatalogView::build(&products, false, state, &CatalogSettings::default(), &friday);

        assert!(view.no_results);
        assert!(view.cards.is_empty());
        assert_eq!(view.total_products, 1);
    }

    #[test]
    fn should_not_flag_no_results_for_empty_catalog() {
        let friday = NaiveDate::from_ymd_opt(2024, 6, 7)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let view = CatalogView::build(&[], true, FilterState::new(), &CatalogSettings::default(), &friday);

        assert!(view.loading);
        assert!(!view.no_results);
        assert_eq!(view.total_pages, 0);
    }
}
