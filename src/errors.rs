//! Root error types for the reconciliation engine.
//!
//! Storage-specific errors (Postgres, CouchDB, etc.) are converted by the
//! storage layer into the string-based `Repository` variant to keep this
//! crate database-agnostic.

use thiserror::Error;

use crate::holdings::HoldingsError;
use crate::income::IncomeError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the reconciliation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Holdings reconciliation failed: {0}")]
    Holdings(#[from] HoldingsError),

    #[error("Income calculation failed: {0}")]
    Income(#[from] IncomeError),

    #[error("Failed to parse ledger value: {0}")]
    Parse(#[from] ParseError),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Parse failures in externally sourced ledger values.
///
/// A malformed date or amount aborts ingestion of the batch it arrived in;
/// rows are not individually skippable.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid decimal value '{0}'")]
    InvalidDecimal(String),

    #[error("invalid date '{0}'")]
    InvalidDate(String),
}
