//! Repository trait for the external transaction ledger.

use async_trait::async_trait;

use super::transactions_model::Transaction;
use crate::Result;

/// Trait defining the contract for the relational ledger source.
///
/// The engine only ever reads transactions; returned rows must be in
/// chronological order, which FIFO matching depends on.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// All transactions for one symbol, ordered by date then id.
    async fn get_by_symbol(&self, symbol: &str) -> Result<Vec<Transaction>>;

    /// Transactions for one symbol within one calendar month.
    async fn get_for_month(&self, symbol: &str, year: i32, month: u32) -> Result<Vec<Transaction>>;

    /// Distinct symbols present in the ledger.
    async fn get_symbols(&self) -> Result<Vec<String>>;
}
