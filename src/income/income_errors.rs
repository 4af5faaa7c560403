//! Error types for income aggregation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IncomeError {
    #[error("invalid year {0}")]
    InvalidYear(i32),

    #[error("invalid month {0}")]
    InvalidMonth(u32),

    /// The month replay produced transactions but no ticker for the symbol,
    /// which means the ledger rows are keyed to a different symbol.
    #[error("no dividend data for {symbol} in {year:04}-{month:02}")]
    MissingDividendData {
        symbol: String,
        year: i32,
        month: u32,
    },
}
