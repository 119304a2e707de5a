use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::bucket::{BankAccount, Investment, MetalHolding, VaultEntry};
use crate::models::profile::Profile;
use crate::models::spot::SpotPrices;

/// Read/write access to the persisted bucket entries, profile and spot price cache.
///
/// Implemented by `JsonStore` (local files) and `ApiClient` (a running
/// server over HTTP). Bucket sources and calculators only depend on this
/// trait, never on where the data lives.
#[async_trait]
pub trait AssetStore: Send + Sync {
    async fn load_vault(&self) -> Result<Vec<VaultEntry>, CoreError>;

    async fn load_banks(&self) -> Result<Vec<BankAccount>, CoreError>;

    async fn load_metals(&self) -> Result<Vec<MetalHolding>, CoreError>;

    async fn load_investments(&self) -> Result<Vec<Investment>, CoreError>;

    /// Last cached spot prices (the fallback when the price API is down).
    async fn load_spot_prices(&self) -> Result<SpotPrices, CoreError>;

    async fn save_spot_prices(&self, prices: &SpotPrices) -> Result<(), CoreError>;

    async fn load_profile(&self) -> Result<Profile, CoreError>;

    /// Replace the stored profile wholesale.
    async fn save_profile(&self, profile: &Profile) -> Result<(), CoreError>;
}
