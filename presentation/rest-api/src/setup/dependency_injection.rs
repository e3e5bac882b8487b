use std::sync::Arc;

use clock::SystemClock;
use logger::TracingLogger;
use remote_api::{CategoryRuleSourceRemote, ProductSourceRemote};

use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::filters::GetCatalogFiltersUseCaseImpl;
use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::catalog::navigate::NavigateCatalogUseCaseImpl;
use business::application::catalog::product_card::GetProductCardUseCaseImpl;
use business::application::catalog::store::CatalogStore;
use business::application::category_rule::get_all::GetCategoryRulesUseCaseImpl;
use business::application::category_rule::update_selection::UpdateSelectionUseCaseImpl;
use business::application::product::register::RegisterProductUseCaseImpl;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub registration_api: crate::api::registration::routes::RegistrationApi,
    /// Run once at startup, off the request path.
    pub catalog_loader: Arc<dyn LoadCatalogUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let clock = Arc::new(SystemClock::from_offset_hours(
            config.storefront.utc_offset_hours,
        ));
        let settings = config.storefront.catalog;
        let store = CatalogStore::new();

        // Infrastructure adapters
        let product_source = Arc::new(ProductSourceRemote::new(config.remote_api.client()));
        let rule_source = Arc::new(CategoryRuleSourceRemote::new(config.remote_api.client()));

        // Catalog use cases
        let catalog_loader = Arc::new(LoadCatalogUseCaseImpl {
            source: product_source.clone(),
            store: store.clone(),
            logger: logger.clone(),
        });
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            store: store.clone(),
            clock: clock.clone(),
            settings,
            logger: logger.clone(),
        });
        let navigate_use_case = Arc::new(NavigateCatalogUseCaseImpl {
            store: store.clone(),
            clock: clock.clone(),
            settings,
            logger: logger.clone(),
        });
        let product_card_use_case = Arc::new(GetProductCardUseCaseImpl {
            store: store.clone(),
            clock,
            settings,
            logger: logger.clone(),
        });
        let filters_use_case = Arc::new(GetCatalogFiltersUseCaseImpl {
            rule_source: rule_source.clone(),
            logger: logger.clone(),
        });

        // Registration use cases
        let get_rules_use_case = Arc::new(GetCategoryRulesUseCaseImpl {
            source: rule_source.clone(),
            logger: logger.clone(),
        });
        let update_selection_use_case = Arc::new(UpdateSelectionUseCaseImpl {
            source: rule_source,
            logger: logger.clone(),
        });
        let register_use_case = Arc::new(RegisterProductUseCaseImpl {
            source: product_source,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(store);

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            browse_use_case,
            navigate_use_case,
            product_card_use_case,
            filters_use_case,
        );

        let registration_api = crate::api::registration::routes::RegistrationApi::new(
            get_rules_use_case,
            update_selection_use_case,
            register_use_case,
        );

        Self {
            health_api,
            catalog_api,
            registration_api,
            catalog_loader,
        }
    }
}
