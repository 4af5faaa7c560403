//! Income module - monthly dividend/interest aggregation and its cache.

mod income_cache;
mod income_errors;
mod income_model;
mod income_service;
mod income_traits;

pub use income_cache::InMemoryDividendCache;
pub use income_errors::IncomeError;
pub use income_model::{DividendEntry, DividendHistory};
pub use income_service::IncomeService;
pub use income_traits::DividendCacheRepositoryTrait;
