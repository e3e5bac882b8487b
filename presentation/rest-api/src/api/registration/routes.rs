use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::category_rule::use_cases::get_all::GetCategoryRulesUseCase;
use business::domain::category_rule::use_cases::update_selection::{
    UpdateSelectionParams, UpdateSelectionUseCase,
};
use business::domain::product::owner::OWNERS;
use business::domain::product::use_cases::register::{
    RegisterProductParams, RegisterProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::registration::dto::{
    CategoryRuleResponse, OwnerResponse, RegisterProductRequest, RegisteredProductResponse,
    SelectionPreviewResponse, UpdateSelectionRequest,
};
use crate::api::tags::ApiTags;

pub struct RegistrationApi {
    get_rules_use_case: Arc<dyn GetCategoryRulesUseCase>,
    update_selection_use_case: Arc<dyn UpdateSelectionUseCase>,
    register_use_case: Arc<dyn RegisterProductUseCase>,
}

impl RegistrationApi {
    pub fn new(
        get_rules_use_case: Arc<dyn GetCategoryRulesUseCase>,
        update_selection_use_case: Arc<dyn UpdateSelectionUseCase>,
        register_use_case: Arc<dyn RegisterProductUseCase>,
    ) -> Self {
        Self {
            get_rules_use_case,
            update_selection_use_case,
            register_use_case,
        }
    }
}

/// Product registration
///
/// Owners, categorisation rules, code preview and product submission for the
/// admin form.
#[OpenApi]
impl RegistrationApi {
    /// List owners
    ///
    /// Consignors a product can be registered for, default first.
    #[oai(path = "/registration/owners", method = "get", tag = "ApiTags::Registration")]
    async fn owners(&self) -> Json<Vec<OwnerResponse>> {
        Json(OWNERS.iter().map(OwnerResponse::from).collect())
    }

    /// List category rules
    #[oai(path = "/registration/rules", method = "get", tag = "ApiTags::Registration")]
    async fn rules(&self) -> GetRulesResponse {
        match self.get_rules_use_case.execute().await {
            Ok(rules) => GetRulesResponse::Ok(Json(
                rules.into_iter().map(CategoryRuleResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRulesResponse::NotFound(json),
                    _ => GetRulesResponse::BadGateway(json),
                }
            }
        }
    }

    /// Update the classification selection
    ///
    /// Applies one change to the selection and returns it with the code
    /// preview. Changing the base resets the subcategory.
    #[oai(path = "/registration/selection", method = "post", tag = "ApiTags::Registration")]
    async fn update_selection(&self, body: Json<UpdateSelectionRequest>) -> UpdateSelectionResponse {
        let params = UpdateSelectionParams {
            selection: body.0.selection.map(|s| s.into()),
            change: body.0.change.map(|c| c.into()),
        };

        match self.update_selection_use_case.execute(params).await {
            Ok(preview) => UpdateSelectionResponse::Ok(Json(preview.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateSelectionResponse::NotFound(json),
                    _ => UpdateSelectionResponse::BadGateway(json),
                }
            }
        }
    }

    /// Register a product
    ///
    /// Validates the form and submits it to the product source, which
    /// generates the product code.
    #[oai(path = "/registration/products", method = "post", tag = "ApiTags::Registration")]
    async fn register(&self, body: Json<RegisterProductRequest>) -> RegisterProductResponse {
        let params = RegisterProductParams {
            form: body.0.into(),
        };

        match self.register_use_case.execute(params).await {
            Ok(code) => RegisterProductResponse::Created(Json(code.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterProductResponse::BadRequest(json),
                    422 => RegisterProductResponse::Rejected(json),
                    _ => RegisterProductResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRulesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryRuleResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateSelectionResponse {
    #[oai(status = 200)]
    Ok(Json<SelectionPreviewResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterProductResponse {
    #[oai(status = 201)]
    Created(Json<RegisteredProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    Rejected(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
