use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::settings::Settings;
use crate::models::spot::SpotPrices;
use crate::providers::goldapi::GoldApiProvider;
use crate::providers::traits::SpotPriceProvider;
use crate::storage::traits::AssetStore;

/// Fetches live gold and silver spot prices, keeping the last good result
/// in the store as an offline fallback.
///
/// Fallback order on failure: cached prices in the store, then
/// `SpotPrices::default()` (zero gold/silver, fixed copper). `refresh`
/// therefore never fails; it only gets staler.
pub struct SpotPriceService {
    providers: Vec<Box<dyn SpotPriceProvider>>,
    store: Arc<dyn AssetStore>,
    copper_price: f64,
}

impl SpotPriceService {
    /// Service with the providers `settings` has API keys for.
    pub fn new(store: Arc<dyn AssetStore>, settings: &Settings) -> Self {
        let mut providers: Vec<Box<dyn SpotPriceProvider>> = Vec::new();
        if let Some(key) = settings.api_keys.get("goldapi") {
            providers.push(Box::new(GoldApiProvider::new(key.clone())));
        }
        Self::with_providers(store, providers, settings.copper_price)
    }

    pub fn with_providers(
        store: Arc<dyn AssetStore>,
        providers: Vec<Box<dyn SpotPriceProvider>>,
        copper_price: f64,
    ) -> Self {
        Self {
            providers,
            store,
            copper_price,
        }
    }

    /// Add a provider after the existing ones (used as a fallback).
    pub fn register(&mut self, provider: Box<dyn SpotPriceProvider>) {
        self.providers.push(provider);
    }

    pub fn has_provider(&self) -> bool {
        !self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    /// Fetch live prices and cache them; fall back to the cache on any failure.
    pub async fn refresh(&self) -> SpotPrices {
        match self.fetch_live().await {
            Ok(prices) => {
                if let Err(e) = self.store.save_spot_prices(&prices).await {
                    warn!(error = %e, "Could not cache spot prices");
                }
                prices
            }
            Err(e) => {
                warn!(error = %e, "Spot price fetch failed, using cached prices");
                self.cached().await
            }
        }
    }

    /// Last cached prices, or defaults when nothing was ever cached.
    pub async fn cached(&self) -> SpotPrices {
        match self.store.load_spot_prices().await {
            Ok(prices) => prices,
            Err(e) => {
                warn!(error = %e, "Spot price cache unavailable, using defaults");
                SpotPrices::default()
            }
        }
    }

    /// Gold and silver from the providers; both must succeed.
    pub async fn fetch_live(&self) -> Result<SpotPrices, CoreError> {
        let (gold, silver) = futures::join!(self.fetch_price("gold"), self.fetch_price("silver"));
        Ok(SpotPrices {
            gold: gold?,
            silver: silver?,
            copper: self.copper_price,
            last_updated: Some(Utc::now()),
        })
    }

    /// Try providers in registration order until one returns a usable price.
    async fn fetch_price(&self, metal: &str) -> Result<f64, CoreError> {
        if self.providers.is_empty() {
            return Err(CoreError::Api {
                provider: "spot prices".into(),
                message: "no spot price provider configured".into(),
            });
        }

        let mut last_error = None;
        for provider in &self.providers {
            match provider.get_spot_price(metal).await {
                Ok(price) if price.is_finite() && price >= 0.0 => {
                    debug!(metal, price, provider = provider.name(), "Fetched spot price");
                    return Ok(price);
                }
                Ok(price) => {
                    last_error = Some(CoreError::Api {
                        provider: provider.name().to_string(),
                        message: format!(
                            "Invalid price returned for {metal}: {price} (must be finite and non-negative)"
                        ),
                    });
                }
                Err(e) => {
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CoreError::Api {
            provider: "spot prices".into(),
            message: format!("no price for {metal}"),
        }))
    }
}
