//! Error types for holdings reconciliation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised while replaying ledger rows into holdings state.
///
/// FIFO shortfalls are deliberately *not* errors - they go to the pending
/// queue and resolve opportunistically on later buys.
#[derive(Error, Debug)]
pub enum HoldingsError {
    /// A bond redemption left shares behind; redemptions are expected to
    /// drain every `Buy Bonds` lot exactly.
    #[error("bond redemption for {symbol} on {date} left {leftover} shares unconsumed")]
    BondOversell {
        symbol: String,
        date: NaiveDate,
        leftover: Decimal,
    },

    /// An `Add Shares` row landed on a transfer event's destination with no
    /// stashed `Remove Shares` counterpart from the source account.
    #[error("missing transfer counterpart for {symbol} into '{account}' on {date}")]
    MissingTransferCounterpart {
        symbol: String,
        account: String,
        date: NaiveDate,
    },

    /// A transfer event names a source account the ticker has never seen.
    #[error("transfer source account '{account}' not found for {symbol}")]
    MissingAccount { symbol: String, account: String },

    /// A stock split row whose description does not carry a usable
    /// `N for M` ratio.
    #[error("invalid split ratio for {symbol}: '{description}'")]
    InvalidSplitRatio { symbol: String, description: String },
}
