use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::catalog::filter::{CategoryFilter, FilterState, SHOW_ALL_LABEL};
use business::domain::catalog::use_cases::filters::CatalogFilters;
use business::domain::catalog::use_cases::navigate::CatalogAction;
use business::domain::catalog::view::CatalogView;
use business::domain::pricing::live_window::LiveWindowState;
use business::domain::pricing::price_view::{BidView, PriceView};
use business::domain::product::card::{CardView, ProductCard};
use business::domain::product::carousel::CarouselMove;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogRequestError {
    #[error("catalog.page_required")]
    PageRequired,
}

/// Filter state as exchanged with the client. Blank or "Ver Todo" means no filter.
#[derive(Debug, Clone, Object, PartialEq)]
pub struct FilterStateDto {
    #[oai(default)]
    pub audience: String,
    #[oai(default)]
    pub product_type: String,
    /// 1-based page number
    #[oai(default = "first_page")]
    pub page: usize,
}

fn first_page() -> usize {
    1
}

impl From<FilterStateDto> for FilterState {
    fn from(dto: FilterStateDto) -> Self {
        FilterState {
            audience: CategoryFilter::parse(Some(dto.audience.as_str())),
            product_type: CategoryFilter::parse(Some(dto.product_type.as_str())),
            page: dto.page,
        }
    }
}

impl From<&FilterState> for FilterStateDto {
    fn from(state: &FilterState) -> Self {
        Self {
            audience: state.audience.to_string(),
            product_type: state.product_type.to_string(),
            page: state.page,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum, PartialEq)]
pub enum CatalogActionKindDto {
    #[oai(rename = "select_audience")]
    SelectAudience,
    #[oai(rename = "select_type")]
    SelectType,
    #[oai(rename = "go_to_page")]
    GoToPage,
}

#[derive(Debug, Clone, Object)]
pub struct CatalogActionDto {
    pub kind: CatalogActionKindDto,
    /// Category value for the select actions; blank selects everything
    #[oai(skip_serializing_if_is_none)]
    pub value: Option<String>,
    /// Target page for `go_to_page`
    #[oai(skip_serializing_if_is_none)]
    pub page: Option<usize>,
}

impl TryFrom<CatalogActionDto> for CatalogAction {
    type Error = CatalogRequestError;

    fn try_from(dto: CatalogActionDto) -> Result<Self, Self::Error> {
        match dto.kind {
            CatalogActionKindDto::SelectAudience => Ok(CatalogAction::SelectAudience(
                CategoryFilter::parse(dto.value.as_deref()),
            )),
            CatalogActionKindDto::SelectType => Ok(CatalogAction::SelectType(
                CategoryFilter::parse(dto.value.as_deref()),
            )),
            CatalogActionKindDto::GoToPage => dto
                .page
                .map(CatalogAction::GoToPage)
                .ok_or(CatalogRequestError::PageRequired),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NavigateCatalogRequest {
    pub state: FilterStateDto,
    pub action: CatalogActionDto,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum, PartialEq)]
pub enum LiveWindowDto {
    #[oai(rename = "open")]
    Open,
    #[oai(rename = "closed")]
    Closed,
}

impl From<LiveWindowState> for LiveWindowDto {
    fn from(state: LiveWindowState) -> Self {
        match state {
            LiveWindowState::Open => LiveWindowDto::Open,
            LiveWindowState::Closed => LiveWindowDto::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum, PartialEq)]
pub enum CarouselMoveDto {
    #[oai(rename = "stay")]
    Stay,
    #[oai(rename = "next")]
    Next,
    #[oai(rename = "prev")]
    Prev,
}

impl From<CarouselMoveDto> for CarouselMove {
    fn from(dto: CarouselMoveDto) -> Self {
        match dto {
            CarouselMoveDto::Stay => CarouselMove::Stay,
            CarouselMoveDto::Next => CarouselMove::Next,
            CarouselMoveDto::Prev => CarouselMove::Prev,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BidResponse {
    /// "PUJA:" or "PUJA (APARTADO):"
    pub label: String,
    pub short_code: String,
    pub sizes: String,
    /// Formatted live price, e.g. "$250.00"
    pub price: String,
}

impl From<BidView> for BidResponse {
    fn from(bid: BidView) -> Self {
        Self {
            label: bid.label,
            short_code: bid.short_code,
            sizes: bid.sizes,
            price: bid.price.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceResponse {
    pub window: LiveWindowDto,
    /// Formatted main price, e.g. "$300.00"
    pub price: String,
    pub struck_through: bool,
    #[oai(skip_serializing_if_is_none)]
    pub badge: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub bid: Option<BidResponse>,
}

impl From<PriceView> for PriceResponse {
    fn from(view: PriceView) -> Self {
        Self {
            window: view.window.into(),
            price: view.price.to_string(),
            struck_through: view.struck_through,
            badge: view.badge,
            bid: view.bid.map(BidResponse::from),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductCardResponse {
    pub code: String,
    pub short_code: String,
    pub description: String,
    /// Current carousel photo, or the placeholder image
    pub image_url: String,
    pub photo_index: usize,
    pub photo_count: usize,
    pub carousel_controls: bool,
    /// "2 / 3", only when there is more than one photo
    #[oai(skip_serializing_if_is_none)]
    pub carousel_indicator: Option<String>,
    pub sizes: String,
    pub price: PriceResponse,
}

impl From<ProductCard> for ProductCardResponse {
    fn from(card: ProductCard) -> Self {
        Self {
            code: card.code,
            short_code: card.short_code,
            description: card.description,
            image_url: card.image_url,
            photo_index: card.photo_index,
            photo_count: card.photo_count,
            carousel_controls: card.carousel_controls,
            carousel_indicator: card.carousel_indicator,
            sizes: card.sizes,
            price: card.price.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CardViewResponse {
    pub loading: bool,
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub card: Option<ProductCardResponse>,
}

impl From<CardView> for CardViewResponse {
    fn from(view: CardView) -> Self {
        match view {
            CardView::Loading { message } => Self {
                loading: true,
                message: Some(message),
                card: None,
            },
            CardView::Ready(card) => Self {
                loading: false,
                message: None,
                card: Some((*card).into()),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogViewResponse {
    pub state: FilterStateDto,
    pub loading: bool,
    pub total_products: usize,
    pub total_matches: usize,
    pub total_pages: usize,
    pub no_results: bool,
    pub scroll_to_top: bool,
    pub cards: Vec<ProductCardResponse>,
}

impl From<CatalogView> for CatalogViewResponse {
    fn from(view: CatalogView) -> Self {
        Self {
            state: (&view.state).into(),
            loading: view.loading,
            total_products: view.total_products,
            total_matches: view.total_matches,
            total_pages: view.total_pages,
            no_results: view.no_results,
            scroll_to_top: view.scroll_to_top,
            cards: view.cards.into_iter().map(ProductCardResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CatalogFiltersResponse {
    /// Label of the option that clears a filter
    pub show_all_label: String,
    pub audiences: Vec<String>,
    pub types: Vec<String>,
}

impl From<CatalogFilters> for CatalogFiltersResponse {
    fn from(filters: CatalogFilters) -> Self {
        Self {
            show_all_label: SHOW_ALL_LABEL.to_string(),
            audiences: filters.audiences,
            types: filters.types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_blank_and_label_as_show_all() {
        let state: FilterState = FilterStateDto {
            audience: String::new(),
            product_type: SHOW_ALL_LABEL.to_string(),
            page: 2,
        }
        .into();

        assert_eq!(state.audience, CategoryFilter::ShowAll);
        assert_eq!(state.product_type, CategoryFilter::ShowAll);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn should_echo_show_all_label_back_to_client() {
        let state = FilterState::new().select_audience(CategoryFilter::only("DAMA"));

        let dto = FilterStateDto::from(&state);

        assert_eq!(dto.audience, "DAMA");
        assert_eq!(dto.product_type, SHOW_ALL_LABEL);
    }

    #[test]
    fn should_require_page_for_page_change() {
        let action = CatalogActionDto {
            kind: CatalogActionKindDto::GoToPage,
            value: None,
            page: None,
        };

        assert_eq!(
            CatalogAction::try_from(action).unwrap_err(),
            CatalogRequestError::PageRequired
        );
    }

    #[test]
    fn should_convert_select_type_action() {
        let action = CatalogActionDto {
            kind: CatalogActionKindDto::SelectType,
            value: Some("ZAPATOS".to_string()),
            page: None,
        };

        assert_eq!(
            CatalogAction::try_from(action).unwrap(),
            CatalogAction::SelectType(CategoryFilter::only("ZAPATOS"))
        );
    }

    #[test]
    fn should_flatten_loading_card() {
        let response = CardViewResponse::from(CardView::loading());

        assert!(response.loading);
        assert!(response.card.is_none());
        assert_eq!(
            response.message.as_deref(),
            Some("Cargando datos del producto...")
        );
    }
}
