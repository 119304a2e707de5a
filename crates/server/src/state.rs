use money_map_core::models::settings::Settings;
use money_map_core::services::spot_price_service::SpotPriceService;
use money_map_core::storage::json_store::JsonStore;
use money_map_core::storage::traits::AssetStore;
use money_map_core::MoneyMap;
use std::sync::Arc;

/// Shared state handed to every route.
pub struct AppState {
    /// Concrete store for the append/delete routes.
    pub store: Arc<JsonStore>,
    pub money_map: MoneyMap,
    pub spot_prices: SpotPriceService,
}

impl AppState {
    pub fn new(store: Arc<JsonStore>, settings: &Settings) -> Self {
        let dyn_store: Arc<dyn AssetStore> = store.clone();
        Self::with_spot_service(store, SpotPriceService::new(dyn_store, settings))
    }

    /// State with a caller-built spot price service (custom providers).
    pub fn with_spot_service(store: Arc<JsonStore>, spot_prices: SpotPriceService) -> Self {
        let dyn_store: Arc<dyn AssetStore> = store.clone();
        Self {
            money_map: MoneyMap::new(dyn_store),
            store,
            spot_prices,
        }
    }
}
