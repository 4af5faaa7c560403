//! Monthly dividend/interest aggregation with a closed-month cache.

use chrono::{Datelike, NaiveDate, Utc};
use futures::future::join_all;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

use super::income_errors::IncomeError;
use super::income_model::{DividendEntry, DividendHistory};
use super::income_traits::DividendCacheRepositoryTrait;
use crate::constants::MIN_LEDGER_YEAR;
use crate::holdings::{TickerSet, TransferEventSet};
use crate::transactions::{TransactionRepositoryTrait, TransactionSet};
use crate::{Error, Result};

/// Computes per-symbol monthly dividend totals by replaying each month's
/// transactions through a throwaway `TickerSet`.
///
/// Months that ended more than a year ago are assumed immutable and served
/// from the cache; the trailing year is always recomputed because
/// late-arriving corrections are expected.
pub struct IncomeService {
    ledger: Arc<dyn TransactionRepositoryTrait>,
    dividend_cache: Arc<dyn DividendCacheRepositoryTrait>,
    events: Arc<TransferEventSet>,
}

impl IncomeService {
    pub fn new(
        ledger: Arc<dyn TransactionRepositoryTrait>,
        dividend_cache: Arc<dyn DividendCacheRepositoryTrait>,
        events: Arc<TransferEventSet>,
    ) -> Self {
        IncomeService {
            ledger,
            dividend_cache,
            events,
        }
    }

    fn validate_month(year: i32, month: u32) -> Result<NaiveDate> {
        let today = Utc::now().date_naive();
        if year < MIN_LEDGER_YEAR || year > today.year() {
            return Err(IncomeError::InvalidYear(year).into());
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| IncomeError::InvalidMonth(month).into())
    }

    /// First day of the month one year before today; months starting before
    /// this are closed and cacheable.
    fn cache_cutover() -> Option<NaiveDate> {
        let today = Utc::now().date_naive();
        NaiveDate::from_ymd_opt(today.year() - 1, today.month(), 1)
    }

    /// The dividend+interest total for one symbol and calendar month.
    pub async fn dividend_for_month(
        &self,
        symbol: &str,
        year: i32,
        month: u32,
    ) -> Result<DividendEntry> {
        let requested = Self::validate_month(year, month)?;
        let cacheable = matches!(Self::cache_cutover(), Some(cutover) if requested < cutover);

        if cacheable {
            if let Some(entry) = self.dividend_cache.get(symbol, year, month).await? {
                debug!("Dividend cache hit for {} {:04}-{:02}", symbol, year, month);
                return Ok(entry);
            }
        }

        let mut entry = DividendEntry::new(symbol, year, month);
        let transactions = self.ledger.get_for_month(symbol, year, month).await?;
        debug!(
            "{}: {} transactions in {:04}-{:02}",
            symbol,
            transactions.len(),
            year,
            month
        );

        if !transactions.is_empty() {
            let set = TransactionSet::from_transactions(transactions);
            let mut tickers = TickerSet::new(Arc::clone(&self.events));
            tickers.load(&set)?;
            let ticker = tickers.get_ticker(symbol).ok_or_else(|| {
                Error::from(IncomeError::MissingDividendData {
                    symbol: symbol.to_string(),
                    year,
                    month,
                })
            })?;
            entry.amount = ticker.dividends();
        }

        if cacheable {
            // Last-write-wins upsert; a lost race recomputes the same value.
            if let Err(e) = self.dividend_cache.put(&entry).await {
                warn!(
                    "Failed to cache dividend entry for {} {:04}-{:02}: {}",
                    symbol, year, month, e
                );
            }
        }
        Ok(entry)
    }

    /// Month-by-month history walking backwards from the current month.
    pub async fn dividend_history(
        &self,
        symbol: &str,
        months_back: u32,
    ) -> Result<DividendHistory> {
        let today = Utc::now().date_naive();
        let mut year = today.year();
        let mut month = today.month();

        let mut history = DividendHistory::new(symbol);
        for _ in 0..months_back {
            history.add_entry(self.dividend_for_month(symbol, year, month).await?);
            if month == 1 {
                year -= 1;
                month = 12;
            } else {
                month -= 1;
            }
        }
        Ok(history)
    }

    /// Builds the full multi-symbol dividend matrix, one concurrent
    /// computation per symbol. A failed symbol fails the matrix instead of
    /// hanging the join.
    pub async fn dividend_matrix(
        &self,
        symbols: &[String],
        months_back: u32,
    ) -> Result<HashMap<String, DividendHistory>> {
        let futures = symbols.iter().map(|symbol| async move {
            let history = self.dividend_history(symbol, months_back).await;
            (symbol.clone(), history)
        });

        let mut matrix = HashMap::with_capacity(symbols.len());
        for (symbol, history) in join_all(futures).await {
            matrix.insert(symbol, history?);
        }
        Ok(matrix)
    }
}
