use chrono::{Datelike, Timelike};

use crate::domain::pricing::price_view::{PricePresenter, PriceView};

use super::carousel::Carousel;
use super::model::Product;

pub const SINGLE_SIZE_LABEL: &str = "Única";
pub const LOADING_CARD_MESSAGE: &str = "Cargando datos del producto...";

pub fn sizes_text(sizes: &[String]) -> String {
    if sizes.is_empty() {
        return SINGLE_SIZE_LABEL.to_string();
    }
    sizes.join(", ")
}

/// Everything a storefront card needs for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub code: String,
    pub short_code: String,
    pub description: String,
    pub image_url: String,
    pub photo_index: usize,
    pub photo_count: usize,
    pub carousel_controls: bool,
    pub carousel_indicator: Option<String>,
    pub sizes: String,
    pub price: PriceView,
}

impl ProductCard {
    pub fn build<T: Datelike + Timelike>(
        product: &Product,
        carousel: Carousel,
        presenter: &PricePresenter,
        now: &T,
    ) -> Self {
        Self {
            code: product.code.to_string(),
            short_code: product.code.short_code(),
            description: product.description.clone(),
            image_url: carousel.current(&product.photos).to_string(),
            photo_index: carousel.index(),
            photo_count: carousel.len(),
            carousel_controls: carousel.has_controls(),
            carousel_indicator: carousel.indicator(),
            sizes: sizes_text(&product.sizes),
            price: presenter.present(product, now, product.reserved),
        }
    }
}

/// A card, or the neutral placeholder rendered while no product is at hand.
#[derive(Debug, Clone, PartialEq)]
pub enum CardView {
    Loading { message: String },
    Ready(Box<ProductCard>),
}

impl CardView {
    pub fn loading() -> Self {
        CardView::Loading {
            message: LOADING_CARD_MESSAGE.to_string(),
        }
    }

    pub fn for_product<T: Datelike + Timelike>(
        product: Option<&Product>,
        carousel: Carousel,
        presenter: &PricePresenter,
        now: &T,
    ) -> Self {
        match product {
            Some(product) => {
                CardView::Ready(Box::new(ProductCard::build(product, carousel, presenter, now)))
            }
            None => CardView::loading(),
        }
    }
}
