use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CatalogStore;
use crate::domain::catalog::pagination::paginate_state;
use crate::domain::catalog::settings::CatalogSettings;
use crate::domain::catalog::use_cases::navigate::{
    CatalogAction, NavigateCatalogParams, NavigateCatalogUseCase,
};
use crate::domain::catalog::view::CatalogView;
use crate::domain::clock::Clock;
use crate::domain::logger::Logger;

pub struct NavigateCatalogUseCaseImpl {
    pub store: CatalogStore,
    pub clock: Arc<dyn Clock>,
    pub settings: CatalogSettings,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl NavigateCatalogUseCase for NavigateCatalogUseCaseImpl {
    async fn execute(&self, params: NavigateCatalogParams) -> CatalogView {
        let snapshot = self.store.read().await;
        let current = params.state;

        let (state, scroll_to_top) = match params.action {
            CatalogAction::SelectAudience(audience) => (current.select_audience(audience), false),
            CatalogAction::SelectType(product_type) => (current.select_type(product_type), false),
            CatalogAction::GoToPage(page) => {
                let total_pages =
                    paginate_state(&snapshot.products, &current, self.settings.page_size)
                        .total_pages;
                match current.go_to_page(page, total_pages) {
                    Some(next) => (next, true),
                    None => {
                        self.logger.debug(&format!(
                            "Ignoring page {} outside 1..={}",
                            page, total_pages
                        ));
                        (current, false)
                    }
                }
            }
        };

        let now = self.clock.now();
        CatalogView::build(
            &snapshot.products,
            snapshot.loading,
            state,
            &self.settings,
            &now,
        )
        .with_scroll_to_top(scroll_to_top)
    }
}
