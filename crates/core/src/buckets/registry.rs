use futures::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::analytics::{AssetBreakdown, BucketTotal};
use crate::models::bucket::BucketKind;
use crate::storage::traits::AssetStore;

use super::banks::BanksBucket;
use super::investments::InvestmentsBucket;
use super::metals::MetalsBucket;
use super::traits::BucketSource;
use super::vault::VaultBucket;

/// Registry of the bucket sources that make up total assets.
///
/// Sources are keyed by name; registering a name twice replaces the earlier
/// source. Buckets are always queried and summed in name order, so the
/// aggregate does not depend on the order in which they were registered.
pub struct AssetRegistry {
    sources: BTreeMap<String, Arc<dyn BucketSource>>,
}

impl AssetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sources: BTreeMap::new(),
        }
    }

    /// Create a registry with the four standard buckets reading from `store`.
    pub fn new_with_defaults(store: Arc<dyn AssetStore>) -> Self {
        let mut registry = Self::new();
        for kind in BucketKind::ALL {
            registry.register_source(standard_bucket(kind, Arc::clone(&store)));
        }
        registry
    }

    /// Register `source` under `name`. Last registration wins.
    pub fn register(&mut self, name: impl Into<String>, source: Arc<dyn BucketSource>) {
        let name = name.into();
        if self.sources.insert(name.clone(), source).is_some() {
            debug!(bucket = %name, "Replaced bucket source");
        }
    }

    /// Register a source under its own name.
    pub fn register_source(&mut self, source: Arc<dyn BucketSource>) {
        let name = source.name().to_string();
        self.register(name, source);
    }

    /// Remove a bucket; returns whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.sources.remove(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&dyn BucketSource> {
        self.sources.get(name).map(|s| s.as_ref())
    }

    /// Registered bucket names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.sources.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Query a single bucket.
    ///
    /// Fails if the bucket is not registered, its query fails, or it
    /// reports a non-finite or negative total.
    pub async fn total_of(&self, name: &str) -> Result<f64, CoreError> {
        let source = self
            .sources
            .get(name)
            .ok_or_else(|| CoreError::NotFound(format!("bucket '{name}'")))?;
        checked_total(name, source.as_ref()).await
    }

    /// Query every bucket concurrently and collect per-bucket totals.
    ///
    /// A failing bucket is logged and listed in `failed`; it never blocks or
    /// changes the contribution of the others.
    pub async fn breakdown(&self) -> AssetBreakdown {
        let queries = self.sources.iter().map(|(name, source)| async move {
            (name.as_str(), checked_total(name, source.as_ref()).await)
        });
        let results = join_all(queries).await;

        let mut breakdown = AssetBreakdown::default();
        for (name, result) in results {
            match result {
                Ok(total) => {
                    breakdown.total += total;
                    breakdown.buckets.push(BucketTotal {
                        name: name.to_string(),
                        total,
                    });
                }
                Err(e) => {
                    warn!(bucket = name, error = %e, "Failed to calculate bucket total");
                    breakdown.failed.push(name.to_string());
                }
            }
        }
        breakdown
    }

    /// Grand total of all buckets that could be queried.
    pub async fn aggregate(&self) -> f64 {
        self.breakdown().await.total
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn standard_bucket(kind: BucketKind, store: Arc<dyn AssetStore>) -> Arc<dyn BucketSource> {
    match kind {
        BucketKind::Vault => Arc::new(VaultBucket::new(store)),
        BucketKind::Banks => Arc::new(BanksBucket::new(store)),
        BucketKind::Metals => Arc::new(MetalsBucket::new(store)),
        BucketKind::Investments => Arc::new(InvestmentsBucket::new(store)),
    }
}

async fn checked_total(name: &str, source: &dyn BucketSource) -> Result<f64, CoreError> {
    let value = source.total_value().await?;
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::BucketFailed {
            bucket: name.to_string(),
            message: format!("invalid total {value}"),
        });
    }
    Ok(value)
}
