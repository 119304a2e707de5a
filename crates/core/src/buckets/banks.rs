use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::bucket::{BankAccount, BucketKind};
use crate::storage::traits::AssetStore;

use super::traits::BucketSource;

/// Bank account balances: Σ amount.
pub struct BanksBucket {
    store: Arc<dyn AssetStore>,
}

impl BanksBucket {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub fn total_of(accounts: &[BankAccount]) -> f64 {
        accounts.iter().map(|a| a.amount).sum()
    }
}

#[async_trait]
impl BucketSource for BanksBucket {
    fn name(&self) -> &str {
        BucketKind::Banks.name()
    }

    async fn total_value(&self) -> Result<f64, CoreError> {
        let accounts = self.store.load_banks().await?;
        Ok(Self::total_of(&accounts))
    }
}
