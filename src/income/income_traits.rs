//! Repository trait for the dividend cache store.

use async_trait::async_trait;

use super::income_model::DividendEntry;
use crate::Result;

/// Keyed store of per-month dividend totals for closed months.
///
/// Writes are last-write-wins upserts; two runs computing the same closed
/// month race harmlessly since the recomputed value is deterministic.
#[async_trait]
pub trait DividendCacheRepositoryTrait: Send + Sync {
    async fn get(&self, symbol: &str, year: i32, month: u32) -> Result<Option<DividendEntry>>;

    async fn put(&self, entry: &DividendEntry) -> Result<()>;
}
