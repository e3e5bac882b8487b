use std::str::FromStr;

use super::errors::ProductError;
use super::owner::find_owner;
use super::value_objects::{Money, ProductCode, ProductStatus};

/// Catalog entry as served by the product source. Read-only to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: ProductCode,
    pub description: String,
    pub audience_category: String,
    pub type_category: String,
    pub sizes: Vec<String>,
    pub photos: Vec<String>,
    pub local_price: Money,
    pub live_price: Money,
    pub status: ProductStatus,
    /// Held for a buyer. Set by the source, never derived here.
    pub reserved: bool,
}

impl Product {
    /// Constructor for data already owned by the product source (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        code: ProductCode,
        description: String,
        audience_category: String,
        type_category: String,
        sizes: Vec<String>,
        photos: Vec<String>,
        local_price: Money,
        live_price: Money,
        status: ProductStatus,
        reserved: bool,
    ) -> Self {
        Self {
            code,
            description,
            audience_category,
            type_category,
            sizes,
            photos,
            local_price,
            live_price,
            status,
            reserved,
        }
    }
}

/// Raw values of the registration form, as typed by the admin.
#[derive(Debug, Clone)]
pub struct NewProductProps {
    pub owner: String,
    pub audience_category: String,
    pub type_category: String,
    pub description: String,
    pub quantity: String,
    pub local_price: String,
    pub live_price: String,
    pub status: String,
    /// Comma separated, e.g. `s, m, l`.
    pub sizes: String,
    /// Comma separated photo URLs.
    pub photos: String,
}

impl Default for NewProductProps {
    fn default() -> Self {
        Self {
            owner: String::new(),
            audience_category: String::new(),
            type_category: String::new(),
            description: String::new(),
            quantity: "1".to_string(),
            local_price: String::new(),
            live_price: String::new(),
            status: ProductStatus::Available.to_string(),
            sizes: String::new(),
            photos: String::new(),
        }
    }
}

/// Validated registration payload. The code is generated by the source.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub owner: String,
    pub audience_category: String,
    pub type_category: String,
    pub description: String,
    pub quantity: u32,
    pub local_price: Money,
    pub live_price: Money,
    pub status: ProductStatus,
    pub sizes: Vec<String>,
    pub photos: Vec<String>,
}

impl NewProduct {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.owner.trim().is_empty()
            || props.audience_category.trim().is_empty()
            || props.type_category.trim().is_empty()
        {
            return Err(ProductError::ClassificationMissing);
        }

        if find_owner(props.owner.trim()).is_none() {
            return Err(ProductError::UnknownOwner);
        }

        if props.description.trim().is_empty() {
            return Err(ProductError::DescriptionEmpty);
        }

        let quantity = props
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| ProductError::InvalidQuantity)?;
        if quantity == 0 {
            return Err(ProductError::InvalidQuantity);
        }

        let local_price = Money::from_str(&props.local_price)?;
        let live_price = Money::from_str(&props.live_price)?;

        let status = ProductStatus::from_str(props.status.trim())
            .map_err(|_| ProductError::InvalidStatus)?;

        let photos = split_list(&props.photos);
        if !photos.iter().all(|photo| is_web_url(photo)) {
            return Err(ProductError::InvalidPhotoUrl);
        }

        Ok(Self {
            owner: props.owner.trim().to_string(),
            audience_category: props.audience_category,
            type_category: props.type_category,
            description: props.description.trim().to_string(),
            quantity,
            local_price,
            live_price,
            status,
            sizes: split_list(&props.sizes)
                .into_iter()
                .map(|size| size.to_uppercase())
                .collect(),
            photos,
        })
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_web_url(raw: &str) -> bool {
    url::Url::parse(raw)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
