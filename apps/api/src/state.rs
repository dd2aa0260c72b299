use crate::catalog::CatalogService;
use crate::config::Config;
use crate::fulfillment::FulfillmentCalculator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Owner of the mutable pack-size catalog. Handlers take snapshots from it.
    pub catalog: CatalogService,
    pub calculator: FulfillmentCalculator,
}

impl AppState {
    pub fn new(config: Config, catalog: CatalogService) -> Self {
        let calculator = FulfillmentCalculator::new(config.reoptimize_mode);
        Self {
            config,
            catalog,
            calculator,
        }
    }
}
