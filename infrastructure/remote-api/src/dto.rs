use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use business::domain::category_rule::model::{CategoryRule, SubcategoryRule};
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::value_objects::{Money, ProductCode, ProductStatus};

/// Prices arrive either as JSON numbers or as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Number(serde_json::Number),
    Text(String),
}

impl WirePrice {
    fn into_money(self) -> Money {
        let raw = match self {
            WirePrice::Number(n) => n.to_string(),
            WirePrice::Text(s) => s,
        };
        BigDecimal::from_str(raw.trim())
            .map(Money::from_repository)
            .unwrap_or_else(|_| Money::zero())
    }
}

fn money(price: Option<WirePrice>) -> Money {
    price.map(WirePrice::into_money).unwrap_or_else(Money::zero)
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub codigo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(rename = "categoriaBase", default)]
    pub categoria_base: String,
    #[serde(rename = "subcategoriaSeleccionada", default)]
    pub subcategoria_seleccionada: String,
    #[serde(default)]
    pub tallas: Option<Vec<String>>,
    #[serde(default)]
    pub fotos: Option<Vec<String>>,
    #[serde(default)]
    pub precio_local: Option<WirePrice>,
    #[serde(default)]
    pub precio_live: Option<WirePrice>,
    #[serde(default)]
    pub estatus: Option<String>,
    #[serde(default)]
    pub apartado: Option<bool>,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        let status = self
            .estatus
            .as_deref()
            .and_then(|s| s.parse::<ProductStatus>().ok())
            .unwrap_or_default();
        // Sources without an explicit flag mark holds through the status.
        let reserved = self
            .apartado
            .unwrap_or(status == ProductStatus::ReservedLive);

        Product::from_repository(
            ProductCode::new(self.codigo),
            self.descripcion,
            self.categoria_base,
            self.subcategoria_seleccionada,
            self.tallas.unwrap_or_default(),
            self.fotos.unwrap_or_default(),
            money(self.precio_local),
            money(self.precio_live),
            status,
            reserved,
        )
    }
}

#[derive(Debug, Serialize)]
pub struct NewProductDto {
    #[serde(rename = "dueñoSeleccionado")]
    pub dueno_seleccionado: String,
    #[serde(rename = "categoriaBase")]
    pub categoria_base: String,
    #[serde(rename = "subcategoriaSeleccionada")]
    pub subcategoria_seleccionada: String,
    pub descripcion: String,
    pub cantidad: u32,
    pub precio_local: f64,
    pub precio_live: f64,
    pub estatus: String,
    pub tallas: Vec<String>,
    pub fotos: Vec<String>,
}

impl From<&NewProduct> for NewProductDto {
    fn from(product: &NewProduct) -> Self {
        Self {
            dueno_seleccionado: product.owner.clone(),
            categoria_base: product.audience_category.clone(),
            subcategoria_seleccionada: product.type_category.clone(),
            descripcion: product.description.clone(),
            cantidad: product.quantity,
            precio_local: product.local_price.amount().to_f64().unwrap_or(0.0),
            precio_live: product.live_price.amount().to_f64().unwrap_or(0.0),
            estatus: product.status.to_string(),
            tallas: product.sizes.clone(),
            fotos: product.photos.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatedProductDto {
    pub codigo: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDto {
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubcategoryRuleDto {
    pub nombre: String,
    #[serde(default)]
    pub prefijo: String,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRuleDto {
    #[serde(rename = "categoriaBase")]
    pub categoria_base: String,
    #[serde(default)]
    pub subcategorias: Vec<SubcategoryRuleDto>,
}

impl CategoryRuleDto {
    pub fn into_domain(self) -> CategoryRule {
        CategoryRule {
            base: self.categoria_base,
            subcategories: self
                .subcategorias
                .into_iter()
                .map(|sub| SubcategoryRule {
                    name: sub.nombre,
                    prefix: sub.prefijo,
                })
                .collect(),
        }
    }
}
