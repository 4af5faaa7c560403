//! Shareledger Core - ledger reconciliation engine.
//!
//! This crate rebuilds per-symbol, per-account share-lot history from
//! brokerage transaction ledgers: FIFO lot matching, stock splits,
//! event-driven transfers between accounts, and monthly dividend/interest
//! aggregation with a cache for closed months. It is storage-agnostic and
//! defines traits that persistence layers implement.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod income;
pub mod lookups;
pub mod transactions;
pub mod utils;

// Re-export common types from the holdings and transactions modules
pub use holdings::*;
pub use transactions::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
