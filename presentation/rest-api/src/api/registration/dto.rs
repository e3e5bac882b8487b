use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::category_rule::model::{CategoryRule, SubcategoryRule};
use business::domain::category_rule::selection::{RegistrationSelection, SelectionChange};
use business::domain::category_rule::use_cases::update_selection::SelectionPreview;
use business::domain::product::model::NewProductProps;
use business::domain::product::owner::Owner;
use business::domain::product::value_objects::ProductCode;

#[derive(Debug, Clone, Object)]
pub struct OwnerResponse {
    /// Code used as the product code prefix, e.g. "Z"
    pub code: String,
    pub name: String,
}

impl From<&Owner> for OwnerResponse {
    fn from(owner: &Owner) -> Self {
        Self {
            code: owner.code.to_string(),
            name: owner.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubcategoryRuleResponse {
    pub name: String,
    pub prefix: String,
}

impl From<SubcategoryRule> for SubcategoryRuleResponse {
    fn from(sub: SubcategoryRule) -> Self {
        Self {
            name: sub.name,
            prefix: sub.prefix,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryRuleResponse {
    pub base: String,
    pub subcategories: Vec<SubcategoryRuleResponse>,
}

impl From<CategoryRule> for CategoryRuleResponse {
    fn from(rule: CategoryRule) -> Self {
        Self {
            base: rule.base,
            subcategories: rule
                .subcategories
                .into_iter()
                .map(SubcategoryRuleResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object, PartialEq)]
pub struct SelectionDto {
    pub owner: String,
    pub base: String,
    pub subcategory: String,
}

impl From<SelectionDto> for RegistrationSelection {
    fn from(dto: SelectionDto) -> Self {
        Self {
            owner: dto.owner,
            base: dto.base,
            subcategory: dto.subcategory,
        }
    }
}

impl From<RegistrationSelection> for SelectionDto {
    fn from(selection: RegistrationSelection) -> Self {
        Self {
            owner: selection.owner,
            base: selection.base,
            subcategory: selection.subcategory,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum, PartialEq)]
pub enum SelectionFieldDto {
    #[oai(rename = "owner")]
    Owner,
    #[oai(rename = "base")]
    Base,
    #[oai(rename = "subcategory")]
    Subcategory,
}

#[derive(Debug, Clone, Object)]
pub struct SelectionChangeDto {
    pub field: SelectionFieldDto,
    pub value: String,
}

impl From<SelectionChangeDto> for SelectionChange {
    fn from(dto: SelectionChangeDto) -> Self {
        match dto.field {
            SelectionFieldDto::Owner => SelectionChange::Owner(dto.value),
            SelectionFieldDto::Base => SelectionChange::Base(dto.value),
            SelectionFieldDto::Subcategory => SelectionChange::Subcategory(dto.value),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateSelectionRequest {
    /// Current selection; omitted to start from the defaults
    #[oai(skip_serializing_if_is_none)]
    pub selection: Option<SelectionDto>,
    #[oai(skip_serializing_if_is_none)]
    pub change: Option<SelectionChangeDto>,
}

#[derive(Debug, Clone, Object)]
pub struct SelectionPreviewResponse {
    pub selection: SelectionDto,
    /// Code the product will likely get, e.g. "Z-DZAP-0001"
    pub code_preview: String,
    /// Subcategories available for the selected base
    pub subcategories: Vec<SubcategoryRuleResponse>,
}

impl From<SelectionPreview> for SelectionPreviewResponse {
    fn from(preview: SelectionPreview) -> Self {
        Self {
            selection: preview.selection.into(),
            code_preview: preview.code_preview,
            subcategories: preview
                .subcategories
                .into_iter()
                .map(SubcategoryRuleResponse::from)
                .collect(),
        }
    }
}

/// Registration form, with the raw values as typed.
#[derive(Debug, Clone, Object)]
pub struct RegisterProductRequest {
    pub owner: String,
    pub audience_category: String,
    pub type_category: String,
    pub description: String,
    /// Whole number, at least 1 (default: "1")
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
    /// Blank means 0
    #[oai(skip_serializing_if_is_none)]
    pub local_price: Option<String>,
    /// Blank means 0
    #[oai(skip_serializing_if_is_none)]
    pub live_price: Option<String>,
    /// disponible, apartado-live, vendido-local or vendido-live (default: disponible)
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<String>,
    /// Comma separated sizes
    #[oai(skip_serializing_if_is_none)]
    pub sizes: Option<String>,
    /// Comma separated photo URLs
    #[oai(skip_serializing_if_is_none)]
    pub photos: Option<String>,
}

impl From<RegisterProductRequest> for NewProductProps {
    fn from(request: RegisterProductRequest) -> Self {
        let defaults = NewProductProps::default();
        Self {
            owner: request.owner,
            audience_category: request.audience_category,
            type_category: request.type_category,
            description: request.description,
            quantity: request.quantity.unwrap_or(defaults.quantity),
            local_price: request.local_price.unwrap_or(defaults.local_price),
            live_price: request.live_price.unwrap_or(defaults.live_price),
            status: request.status.unwrap_or(defaults.status),
            sizes: request.sizes.unwrap_or(defaults.sizes),
            photos: request.photos.unwrap_or(defaults.photos),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RegisteredProductResponse {
    /// Code generated by the product source
    pub code: String,
    pub short_code: String,
}

impl From<ProductCode> for RegisteredProductResponse {
    fn from(code: ProductCode) -> Self {
        Self {
            short_code: code.short_code(),
            code: code.to_string(),
        }
    }
}
