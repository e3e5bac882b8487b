use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "disponible")]
    Available,
    #[serde(rename = "apartado-live")]
    ReservedLive,
    #[serde(rename = "vendido-local")]
    SoldLocal,
    #[serde(rename = "vendido-live")]
    SoldLive,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductStatus::Available => write!(f, "disponible"),
            ProductStatus::ReservedLive => write!(f, "apartado-live"),
            ProductStatus::SoldLocal => write!(f, "vendido-local"),
            ProductStatus::SoldLive => write!(f, "vendido-live"),
        }
    }
}

impl std::str::FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disponible" => Ok(ProductStatus::Available),
            "apartado-live" => Ok(ProductStatus::ReservedLive),
            "vendido-local" => Ok(ProductStatus::SoldLocal),
            "vendido-live" => Ok(ProductStatus::SoldLive),
            _ => Err(format!("Invalid product status: {}", s)),
        }
    }
}

/// Full product identifier as issued by the remote API,
/// e.g. `J-DRES-0042` (`<owner>-<categoryPrefix><subcategoryPrefix>-<sequence>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form shown next to the bid price.
    pub fn short_code(&self) -> String {
        format_short_code(&self.0)
    }
}

impl std::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Turns `Z-DZAP-0001` into `DZAP 1`.
///
/// Codes with fewer than three dash-delimited segments are returned unchanged.
/// A sequence that is not a number is kept verbatim.
pub fn format_short_code(code: &str) -> String {
    let segments: Vec<&str> = code.split('-').collect();
    if segments.len() < 3 {
        return code.to_string();
    }

    let prefix = segments[1];
    let sequence = segments[2]
        .trim()
        .parse::<u64>()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| segments[2].to_string());

    format!("{} {}", prefix, sequence)
}

/// Non-negative currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(BigDecimal);

impl Money {
    pub fn new(amount: BigDecimal) -> Result<Self, ProductError> {
        if amount < BigDecimal::zero() {
            return Err(ProductError::InvalidPrice);
        }
        Ok(Self(amount))
    }

    /// Constructor for amounts coming from the product source (no validation).
    pub fn from_repository(amount: BigDecimal) -> Self {
        Self(amount)
    }

    pub fn zero() -> Self {
        Self(BigDecimal::zero())
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0.with_scale_round(2, RoundingMode::HalfUp))
    }
}

impl std::str::FromStr for Money {
    type Err = ProductError;

    /// Blank input counts as zero, mirroring the registration form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Money::zero());
        }
        let amount = trimmed
            .parse::<BigDecimal>()
            .map_err(|_| ProductError::InvalidPrice)?;
        Money::new(amount)
    }
}
