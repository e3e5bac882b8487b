use crate::domain::product::model::Product;

/// Label of the "no filter" option, also accepted when parsing.
pub const SHOW_ALL_LABEL: &str = "Ver Todo";

/// One of the two catalog filters: everything, or one exact category value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    ShowAll,
    Only(String),
}

impl CategoryFilter {
    pub fn only(value: impl Into<String>) -> Self {
        CategoryFilter::Only(value.into())
    }

    /// Blank input and the show-all label both mean no filter.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some(SHOW_ALL_LABEL) => CategoryFilter::ShowAll,
            Some(value) => CategoryFilter::Only(value.to_string()),
        }
    }

    pub fn is_show_all(&self) -> bool {
        matches!(self, CategoryFilter::ShowAll)
    }

    /// Exact match, no case folding.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            CategoryFilter::ShowAll => true,
            CategoryFilter::Only(expected) => expected == value,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::ShowAll => write!(f, "{}", SHOW_ALL_LABEL),
            CategoryFilter::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Browsing state of the catalog. Transitions return a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub audience: CategoryFilter,
    pub product_type: CategoryFilter,
    /// 1-based.
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            audience: CategoryFilter::ShowAll,
            product_type: CategoryFilter::ShowAll,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks an audience, clearing the type filter and going back to page 1
    /// in a single step.
    pub fn select_audience(&self, audience: CategoryFilter) -> Self {
        Self {
            audience,
            product_type: CategoryFilter::ShowAll,
            page: 1,
        }
    }

    /// Picks a type within the current audience and goes back to page 1.
    pub fn select_type(&self, product_type: CategoryFilter) -> Self {
        Self {
            audience: self.audience.clone(),
            product_type,
            page: 1,
        }
    }

    /// `None` when `page` is outside `1..=total_pages`; the request is then ignored.
    pub fn go_to_page(&self, page: usize, total_pages: usize) -> Option<Self> {
        if page < 1 || page > total_pages {
            return None;
        }
        Some(Self {
            page,
            ..self.clone()
        })
    }

    pub fn has_active_filter(&self) -> bool {
        !self.audience.is_show_all() || !self.product_type.is_show_all()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.audience.matches(&product.audience_category)
            && self.product_type.matches(&product.type_category)
    }
}
