use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::bucket::{BucketKind, VaultEntry};
use crate::storage::traits::AssetStore;

use super::traits::BucketSource;

/// Cash kept at home: Σ denomination × quantity.
pub struct VaultBucket {
    store: Arc<dyn AssetStore>,
}

impl VaultBucket {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub fn total_of(entries: &[VaultEntry]) -> f64 {
        entries.iter().map(VaultEntry::value).sum()
    }
}

#[async_trait]
impl BucketSource for VaultBucket {
    fn name(&self) -> &str {
        BucketKind::Vault.name()
    }

    async fn total_value(&self) -> Result<f64, CoreError> {
        let entries = self.store.load_vault().await?;
        Ok(Self::total_of(&entries))
    }
}
