use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::filter::{CategoryFilter, FilterState};
use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::filters::GetCatalogFiltersUseCase;
use business::domain::catalog::use_cases::navigate::{
    CatalogAction, NavigateCatalogParams, NavigateCatalogUseCase,
};
use business::domain::catalog::use_cases::product_card::{
    GetProductCardParams, GetProductCardUseCase,
};
use business::domain::product::carousel::CarouselMove;
use business::domain::product::value_objects::ProductCode;

use crate::api::catalog::dto::{
    CardViewResponse, CarouselMoveDto, CatalogFiltersResponse, CatalogViewResponse,
    NavigateCatalogRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    navigate_use_case: Arc<dyn NavigateCatalogUseCase>,
    product_card_use_case: Arc<dyn GetProductCardUseCase>,
    filters_use_case: Arc<dyn GetCatalogFiltersUseCase>,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        navigate_use_case: Arc<dyn NavigateCatalogUseCase>,
        product_card_use_case: Arc<dyn GetProductCardUseCase>,
        filters_use_case: Arc<dyn GetCatalogFiltersUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            navigate_use_case,
            product_card_use_case,
            filters_use_case,
        }
    }
}

/// Public storefront catalog
///
/// Filtering, pagination and product cards priced for the current live window.
#[OpenApi]
impl CatalogApi {
    /// Browse the catalog
    ///
    /// Returns one page of product cards for the given filters. While the
    /// startup fetch is running the page is empty and `loading` is true.
    /// Out-of-range pages return an empty page.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        /// Audience category, omit for all
        audience: Query<Option<String>>,
        /// Type category, omit for all
        #[oai(name = "type")]
        product_type: Query<Option<String>>,
        /// 1-based page number (default: 1)
        page: Query<Option<usize>>,
    ) -> Json<CatalogViewResponse> {
        let state = FilterState {
            audience: CategoryFilter::parse(audience.0.as_deref()),
            product_type: CategoryFilter::parse(product_type.0.as_deref()),
            page: page.0.unwrap_or(1),
        };

        let view = self
            .browse_use_case
            .execute(BrowseCatalogParams { state })
            .await;
        Json(view.into())
    }

    /// Apply a catalog transition
    ///
    /// Selecting an audience clears the type filter, any selection goes back
    /// to page 1, and page changes outside the valid range are ignored.
    #[oai(path = "/catalog/navigate", method = "post", tag = "ApiTags::Catalog")]
    async fn navigate(&self, body: Json<NavigateCatalogRequest>) -> NavigateCatalogResponse {
        let action = match CatalogAction::try_from(body.0.action) {
            Ok(action) => action,
            Err(err) => {
                return NavigateCatalogResponse::BadRequest(Json(ErrorResponse::new(
                    "ValidationError",
                    err.to_string(),
                )));
            }
        };

        let view = self
            .navigate_use_case
            .execute(NavigateCatalogParams {
                state: body.0.state.into(),
                action,
            })
            .await;
        NavigateCatalogResponse::Ok(Json(view.into()))
    }

    /// Filter options
    ///
    /// Audience and type values derived from the category rules.
    #[oai(path = "/catalog/filters", method = "get", tag = "ApiTags::Catalog")]
    async fn filters(&self) -> GetCatalogFiltersResponse {
        match self.filters_use_case.execute().await {
            Ok(filters) => GetCatalogFiltersResponse::Ok(Json(filters.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCatalogFiltersResponse::NotFound(json),
                    _ => GetCatalogFiltersResponse::BadGateway(json),
                }
            }
        }
    }

    /// Single product card
    ///
    /// Renders one card with its photo carousel. `photo` is the current
    /// index and `move` steps it forward or back, wrapping at both ends.
    /// Unknown codes yield the loading placeholder.
    #[oai(path = "/catalog/products/:code", method = "get", tag = "ApiTags::Catalog")]
    async fn product_card(
        &self,
        code: Path<String>,
        /// Current photo index (default: 0)
        photo: Query<Option<usize>>,
        /// Carousel move (default: stay)
        #[oai(name = "move")]
        movement: Query<Option<CarouselMoveDto>>,
    ) -> Json<CardViewResponse> {
        let params = GetProductCardParams {
            code: ProductCode::new(code.0),
            photo_index: photo.0.unwrap_or(0),
            movement: movement.0.map(CarouselMove::from).unwrap_or_default(),
        };

        let view = self.product_card_use_case.execute(params).await;
        Json(view.into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum NavigateCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogViewResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogFiltersResponse {
    #[oai(status = 200)]
    Ok(Json<CatalogFiltersResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
