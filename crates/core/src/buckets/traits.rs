use async_trait::async_trait;

use crate::errors::CoreError;

/// A bucket of holdings that can report its total value.
///
/// Each bucket (vault, banks, metals, investments) implements this trait
/// over its own stored entries. The total is computed on demand and never
/// stored; it may trigger a read from the backing store.
#[async_trait]
pub trait BucketSource: Send + Sync {
    /// Registry name of this bucket (for logs and the breakdown view).
    fn name(&self) -> &str;

    /// Current total value of the bucket, a finite non-negative amount.
    async fn total_value(&self) -> Result<f64, CoreError>;
}
