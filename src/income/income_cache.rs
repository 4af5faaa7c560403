//! In-memory dividend cache, used by tests and single-run reports that do
//! not need a durable store.

use async_trait::async_trait;
use dashmap::DashMap;

use super::income_model::DividendEntry;
use super::income_traits::DividendCacheRepositoryTrait;
use crate::Result;

/// Concurrent map keyed by (symbol, year, month).
#[derive(Debug, Default)]
pub struct InMemoryDividendCache {
    entries: DashMap<(String, i32, u32), DividendEntry>,
}

impl InMemoryDividendCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DividendCacheRepositoryTrait for InMemoryDividendCache {
    async fn get(&self, symbol: &str, year: i32, month: u32) -> Result<Option<DividendEntry>> {
        Ok(self
            .entries
            .get(&(symbol.to_string(), year, month))
            .map(|entry| entry.clone()))
    }

    async fn put(&self, entry: &DividendEntry) -> Result<()> {
        self.entries.insert(
            (entry.symbol.clone(), entry.year, entry.month),
            entry.clone(),
        );
        Ok(())
    }
}
