use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::CoreError;
use crate::models::bucket::{BucketKind, Investment};
use crate::storage::traits::AssetStore;

use super::traits::BucketSource;

/// Platform investments at their entered value: Σ value.
pub struct InvestmentsBucket {
    store: Arc<dyn AssetStore>,
}

impl InvestmentsBucket {
    pub fn new(store: Arc<dyn AssetStore>) -> Self {
        Self { store }
    }

    pub fn total_of(investments: &[Investment]) -> f64 {
        investments.iter().map(|i| i.value).sum()
    }
}

#[async_trait]
impl BucketSource for InvestmentsBucket {
    fn name(&self) -> &str {
        BucketKind::Investments.name()
    }

    async fn total_value(&self) -> Result<f64, CoreError> {
        let investments = self.store.load_investments().await?;
        Ok(Self::total_of(&investments))
    }
}
