//! Income domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One symbol's dividend+interest total for one calendar month.
///
/// Persisted once the month is closed; treated as a cache row, never
/// re-derived unless explicitly overwritten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DividendEntry {
    pub symbol: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

impl DividendEntry {
    pub fn new(symbol: impl Into<String>, year: i32, month: u32) -> Self {
        DividendEntry {
            symbol: symbol.into(),
            year,
            month,
            amount: Decimal::ZERO,
        }
    }
}

/// A symbol's month-by-month dividend history, most recent month first.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DividendHistory {
    pub symbol: String,
    pub entries: Vec<DividendEntry>,
}

impl DividendHistory {
    pub fn new(symbol: impl Into<String>) -> Self {
        DividendHistory {
            symbol: symbol.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: DividendEntry) {
        self.entries.push(entry);
    }

    pub fn sum(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_entry_starts_at_zero() {
        let entry = DividendEntry::new("HD", 2023, 6);
        assert_eq!(entry.amount, Decimal::ZERO);
        assert_eq!(entry.month, 6);
    }

    #[test]
    fn test_history_sum() {
        let mut history = DividendHistory::new("HD");
        let mut june = DividendEntry::new("HD", 2023, 6);
        june.amount = dec!(12.50);
        let mut march = DividendEntry::new("HD", 2023, 3);
        march.amount = dec!(11.25);
        history.add_entry(june);
        history.add_entry(march);
        assert_eq!(history.sum(), dec!(23.75));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_entry_serde_round_trip() {
        let mut entry = DividendEntry::new("AAPL", 2022, 11);
        entry.amount = dec!(4.56);
        let json = serde_json::to_string(&entry).unwrap();
        let back: DividendEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
