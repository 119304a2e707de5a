use async_trait::async_trait;

use crate::errors::CoreError;

/// Source of live precious-metal spot prices.
///
/// Each API (goldapi.io today) implements this trait, so swapping or adding
/// a price source never touches the spot price service or the buckets.
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current USD price per troy ounce for a metal name ("gold", "silver").
    async fn get_spot_price(&self, metal: &str) -> Result<f64, CoreError>;
}
