//! Application state shared by all request handlers.

use std::sync::Arc;

use crate::{currency::RateProvider, storage::CatalogRepository, validation::BeerValidator};

/// Shared state: the catalog, the create-payload validator and the rate
/// provider used by the box-price endpoint.
#[derive(Clone)]
pub struct AppState {
    pub beers: CatalogRepository,
    pub validator: Arc<BeerValidator>,
    pub rates: Arc<dyn RateProvider>,
}

impl AppState {
    pub fn new(
        beers: CatalogRepository,
        validator: BeerValidator,
        rates: Arc<dyn RateProvider>,
    ) -> Self {
        Self {
            beers,
            validator: Arc::new(validator),
            rates,
        }
    }
}
