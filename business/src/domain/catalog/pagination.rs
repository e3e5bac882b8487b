use crate::domain::product::model::Product;

use super::filter::{CategoryFilter, FilterState};

pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of the filtered catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    pub total_pages: usize,
    pub total_matches: usize,
}

pub fn total_pages(total_matches: usize, page_size: usize) -> usize {
    total_matches.div_ceil(page_size.max(1))
}

/// Filters `products` by both categories and slices out `page` (1-based).
///
/// Matches keep the input order. A page outside `1..=total_pages` yields no
/// items; nothing is clamped. A zero `page_size` is treated as 1.
pub fn filter_and_paginate<'a>(
    products: &'a [Product],
    audience: &CategoryFilter,
    product_type: &CategoryFilter,
    page: usize,
    page_size: usize,
) -> CatalogPage<'a> {
    let page_size = page_size.max(1);

    let matches: Vec<&Product> = products
        .iter()
        .filter(|product| {
            audience.matches(&product.audience_category)
                && product_type.matches(&product.type_category)
        })
        .collect();

    let total_matches = matches.len();
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if page == 0 || start >= total_matches {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size).min(total_matches);
        matches[start..end].to_vec()
    };

    CatalogPage {
        items,
        total_pages: total_pages(total_matches, page_size),
        total_matches,
    }
}

pub fn paginate_state<'a>(
    products: &'a [Product],
    state: &FilterState,
    page_size: usize,
) -> CatalogPage<'a> {
    filter_and_paginate(
        products,
        &state.audience,
        &state.product_type,
        state.page,
        page_size,
    )
}

/// "Nothing for this filter combination", as opposed to an empty catalog.
pub fn is_no_results(total_matches: usize, state: &FilterState) -> bool {
    total_matches == 0 && state.has_active_filter()
}
