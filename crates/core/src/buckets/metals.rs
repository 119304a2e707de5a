use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::errors::CoreError;
use crate::models::bucket::BucketKind;
use crate::models::spot::SpotPrices;
use crate::services::metals_service;
use crate::storage::traits::AssetStore;

use super::traits::BucketSource;

/// Precious metals valued at the cached spot prices:
/// Σ weight × quantity × spot(metal).
///
/// Uses the spot price cache rather than a live fetch; refreshing prices
/// is the job of `SpotPriceService`.
pub struct MetalsBucket {
    store: Arc<dyn AssetStore>,
}

impl MetalsBucket {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BucketSource for MetalsBucket {
    fn name(&self) -> &str {
        BucketKind::Metals.name()
    }

    async fn total_value(&self) -> Result<f64, CoreError> {
        let holdings = self.store.load_metals().await?;
        let spot = match self.store.load_spot_prices().await {
            Ok(spot) => spot,
            Err(e) => {
                warn!(error = %e, "Spot price cache unavailable, valuing metals at defaults");
                SpotPrices::default()
            }
        };
        Ok(metals_service::holdings_value(&holdings, &spot))
    }
}
