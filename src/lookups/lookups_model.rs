//! Security-name and instrument-kind lookups.
//!
//! Ledger exports identify securities by display name; downstream everything
//! is keyed by symbol. A `LookupSet` is constructed explicitly by the caller
//! and injected where needed - there is no global lookup state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Sentinel symbol marking a security whose rows should be dropped at
/// ingestion (delisted or otherwise untracked).
pub const DEAD_SYMBOL: &str = "DEAD";

/// Broad instrument classification for a symbol.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstrumentKind {
    Stock,
    MutualFund,
    Bond,
    Cash,
}

impl InstrumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Stock => "Stock",
            InstrumentKind::MutualFund => "Mutual Fund",
            InstrumentKind::Bond => "Bond",
            InstrumentKind::Cash => "Cash",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Stock" => Ok(InstrumentKind::Stock),
            "Mutual Fund" => Ok(InstrumentKind::MutualFund),
            "Bond" => Ok(InstrumentKind::Bond),
            "Cash" => Ok(InstrumentKind::Cash),
            other => Err(format!("unknown instrument kind: {other}")),
        }
    }
}

/// Injected lookup table mapping security display names to symbols and
/// symbols to instrument kinds.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct LookupSet {
    symbols: HashMap<String, String>,
    kinds: HashMap<String, InstrumentKind>,
}

impl LookupSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_symbol(&mut self, security_name: impl Into<String>, symbol: impl Into<String>) {
        self.symbols.insert(security_name.into(), symbol.into());
    }

    pub fn insert_kind(&mut self, symbol: impl Into<String>, kind: InstrumentKind) {
        self.kinds.insert(symbol.into(), kind);
    }

    /// Resolves a security display name to its symbol, if mapped.
    pub fn symbol_for(&self, security_name: &str) -> Option<&str> {
        self.symbols.get(security_name).map(String::as_str)
    }

    /// Reverse lookup: the display name mapped to a symbol, if any.
    pub fn security_for(&self, symbol: &str) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, v)| v.as_str() == symbol)
            .map(|(k, _)| k.as_str())
    }

    pub fn kind_for(&self, symbol: &str) -> Option<InstrumentKind> {
        self.kinds.get(symbol).copied()
    }

    /// True when the security name is mapped to the `DEAD` sentinel.
    pub fn is_dead(&self, security_name: &str) -> bool {
        self.symbol_for(security_name) == Some(DEAD_SYMBOL)
    }

    /// Sorted list of symbols classified as stocks, the set eligible for
    /// dividend-history reporting.
    pub fn stock_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .kinds
            .iter()
            .filter(|(_, kind)| **kind == InstrumentKind::Stock)
            .map(|(symbol, _)| symbol.clone())
            .collect();
        symbols.sort();
        symbols
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LookupSet {
        let mut lookups = LookupSet::new();
        lookups.insert_symbol("Home Depot", "HD");
        lookups.insert_symbol("APPLE INC COM", "AAPL");
        lookups.insert_symbol("Defunct Fund", DEAD_SYMBOL);
        lookups.insert_kind("HD", InstrumentKind::Stock);
        lookups.insert_kind("AAPL", InstrumentKind::Stock);
        lookups.insert_kind("FCNTX", InstrumentKind::MutualFund);
        lookups
    }

    #[test]
    fn test_symbol_for_name() {
        let lookups = sample();
        assert_eq!(lookups.symbol_for("Home Depot"), Some("HD"));
        assert_eq!(lookups.symbol_for("Unknown"), None);
    }

    #[test]
    fn test_security_for_symbol() {
        let lookups = sample();
        assert_eq!(lookups.security_for("AAPL"), Some("APPLE INC COM"));
        assert_eq!(lookups.security_for("MSFT"), None);
    }

    #[test]
    fn test_dead_sentinel() {
        let lookups = sample();
        assert!(lookups.is_dead("Defunct Fund"));
        assert!(!lookups.is_dead("Home Depot"));
    }

    #[test]
    fn test_stock_symbols_sorted_and_filtered() {
        let lookups = sample();
        assert_eq!(lookups.stock_symbols(), vec!["AAPL", "HD"]);
    }

    #[test]
    fn test_instrument_kind_round_trip() {
        assert_eq!(
            "Mutual Fund".parse::<InstrumentKind>().unwrap(),
            InstrumentKind::MutualFund
        );
        assert_eq!(InstrumentKind::Bond.as_str(), "Bond");
        assert!("Derivative".parse::<InstrumentKind>().is_err());
    }
}
