//! Transaction domain models.
//!
//! A `Transaction` is one immutable ledger row; a `TransactionSet` is an
//! ordered batch of them. Insertion order is chronological order and is
//! load-bearing for FIFO matching downstream.

use chrono::{DateTime, NaiveDate, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::lookups::LookupSet;
use crate::utils::{parse_date, parse_decimal};

/// One immutable brokerage ledger row.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub transaction_type: String,
    pub security: String,
    pub symbol: String,
    pub security_payee: String,
    pub description: String,
    pub shares: Decimal,
    pub investment_amount: Decimal,
    pub amount: Decimal,
    pub account: String,
}

/// A ledger row as delivered by an export collaborator, all fields still in
/// display form. Numeric and date parsing happens here; a malformed value
/// aborts the batch rather than skipping the row.
#[derive(Debug, Clone, Default)]
pub struct RawTransaction {
    pub date: String,
    pub transaction_type: String,
    pub security: String,
    pub symbol: String,
    pub security_payee: String,
    pub description: String,
    pub shares: String,
    pub investment_amount: String,
    pub amount: String,
    pub account: String,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = crate::errors::Error;

    fn try_from(raw: RawTransaction) -> Result<Self> {
        Ok(Transaction {
            id: 0,
            date: parse_date(&raw.date)?,
            transaction_type: raw.transaction_type,
            security: raw.security,
            symbol: raw.symbol,
            security_payee: raw.security_payee,
            description: raw.description,
            shares: parse_decimal(&raw.shares)?,
            investment_amount: parse_decimal(&raw.investment_amount)?,
            amount: parse_decimal(&raw.amount)?,
            account: raw.account,
        })
    }
}

/// Ordered batch of transactions, replayed into a `TickerSet` to rebuild
/// holdings.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSet {
    pub transactions: Vec<Transaction>,
    pub as_of: DateTime<Utc>,
}

impl Default for TransactionSet {
    fn default() -> Self {
        TransactionSet {
            transactions: Vec::new(),
            as_of: Utc::now(),
        }
    }
}

impl TransactionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        TransactionSet {
            transactions,
            as_of: Utc::now(),
        }
    }

    pub fn push(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Ingests raw ledger rows, resolving security names to symbols through
    /// the injected lookups and dropping rows mapped to the `DEAD` sentinel.
    /// Row ids are assigned in ingestion order.
    pub fn load_with_lookups(&mut self, rows: Vec<RawTransaction>, lookups: &LookupSet) -> Result<()> {
        for raw in rows {
            if lookups.is_dead(&raw.security) {
                debug!("Skipping dead security '{}'", raw.security);
                continue;
            }
            let mut transaction = Transaction::try_from(raw)?;
            if let Some(symbol) = lookups.symbol_for(&transaction.security) {
                transaction.symbol = symbol.to_string();
            }
            transaction.id = self.transactions.len() as i64 + 1;
            self.transactions.push(transaction);
        }
        debug!("Loaded {} transactions", self.transactions.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw_buy() -> RawTransaction {
        RawTransaction {
            date: "3/9/2021".to_string(),
            transaction_type: "Buy".to_string(),
            security: "Home Depot".to_string(),
            symbol: String::new(),
            security_payee: String::new(),
            description: "100 shares @ 50.00".to_string(),
            shares: "100".to_string(),
            investment_amount: "$5,000.00".to_string(),
            amount: "(5,000.00)".to_string(),
            account: "Brokerage".to_string(),
        }
    }

    #[test]
    fn test_raw_transaction_parses_typed_fields() {
        let transaction = Transaction::try_from(raw_buy()).unwrap();
        assert_eq!(transaction.date, NaiveDate::from_ymd_opt(2021, 3, 9).unwrap());
        assert_eq!(transaction.shares, dec!(100));
        assert_eq!(transaction.investment_amount, dec!(5000.00));
        assert_eq!(transaction.amount, dec!(-5000.00));
    }

    #[test]
    fn test_raw_transaction_bad_date_is_error() {
        let mut raw = raw_buy();
        raw.date = "not-a-date".to_string();
        assert!(Transaction::try_from(raw).is_err());
    }

    #[test]
    fn test_raw_transaction_bad_amount_is_error() {
        let mut raw = raw_buy();
        raw.amount = "five thousand".to_string();
        assert!(Transaction::try_from(raw).is_err());
    }

    #[test]
    fn test_load_with_lookups_substitutes_symbol_and_skips_dead() {
        let mut lookups = LookupSet::new();
        lookups.insert_symbol("Home Depot", "HD");
        lookups.insert_symbol("Defunct Fund", crate::lookups::DEAD_SYMBOL);

        let mut dead = raw_buy();
        dead.security = "Defunct Fund".to_string();

        let mut set = TransactionSet::new();
        set.load_with_lookups(vec![raw_buy(), dead, raw_buy()], &lookups)
            .unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|t| t.symbol == "HD"));
        assert_eq!(set.transactions[0].id, 1);
        assert_eq!(set.transactions[1].id, 2);
    }

    #[test]
    fn test_load_with_lookups_aborts_batch_on_parse_error() {
        let lookups = LookupSet::new();
        let mut bad = raw_buy();
        bad.shares = "many".to_string();

        let mut set = TransactionSet::new();
        assert!(set.load_with_lookups(vec![raw_buy(), bad], &lookups).is_err());
    }
}
