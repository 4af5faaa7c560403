//! Ticker and TickerSet - per-symbol account ownership and batch replay.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::account::Account;
use super::entity::Entity;
use super::holdings_errors::HoldingsError;
use super::transfer_events::TransferEventSet;
use crate::constants::CLOSED_ACCOUNT_PREFIX;
use crate::errors::Result;
use crate::transactions::{
    TransactionSet, TRANSACTION_TYPE_ADD_SHARES, TRANSACTION_TYPE_REMOVE_SHARES,
};

/// Owns every account for one symbol and routes entities to them, applying
/// the transfer-event calendar before the normal account path.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: String,
    pub accounts: HashMap<String, Account>,
    #[serde(skip)]
    events: Arc<TransferEventSet>,
    /// Stashed `Remove Shares` rows waiting for their `Add Shares`
    /// counterpart, keyed by source account. Cleared as transfers resolve.
    #[serde(skip)]
    pending_transfers: HashMap<String, Entity>,
}

impl Ticker {
    pub fn new(symbol: impl Into<String>, events: Arc<TransferEventSet>) -> Self {
        Ticker {
            symbol: symbol.into(),
            accounts: HashMap::new(),
            events,
            pending_transfers: HashMap::new(),
        }
    }

    /// Routes one entity. Removals dated on an event's source side are
    /// stashed instead of removed; additions dated on an event's destination
    /// side move the matching lot across accounts; everything else goes to
    /// the owning account's matcher.
    pub fn add_entity(&mut self, entity: Entity) -> Result<()> {
        match entity.transaction_type.as_str() {
            TRANSACTION_TYPE_REMOVE_SHARES => {
                if self.events.matches_from(entity.date, &entity.account) {
                    debug!(
                        "{}: stashing removal from '{}' on {} pending its transfer counterpart",
                        self.symbol, entity.account, entity.date
                    );
                    self.pending_transfers.insert(entity.account.clone(), entity);
                    return Ok(());
                }
            }
            TRANSACTION_TYPE_ADD_SHARES => {
                if let Some(event) = self.events.find_to(entity.date, &entity.account).cloned() {
                    if self.resolve_transfer(&event, &entity)? {
                        return Ok(());
                    }
                    // Unresolved transfers fall through to the normal add,
                    // leaving the source account untouched.
                }
            }
            _ => {}
        }

        let account = self
            .accounts
            .entry(entity.account.clone())
            .or_insert_with(|| Account::new(entity.account.clone()));
        account.add_entity(entity)?;
        Ok(())
    }

    /// Moves the source lot whose remaining shares exactly match the
    /// addition across accounts. Returns `Ok(false)` when no lot matches,
    /// in which case the transfer does not occur.
    fn resolve_transfer(&mut self, event: &super::TransferEvent, entity: &Entity) -> Result<bool> {
        if !self.pending_transfers.contains_key(&event.from_account) {
            return Err(HoldingsError::MissingTransferCounterpart {
                symbol: self.symbol.clone(),
                account: event.from_account.clone(),
                date: entity.date,
            }
            .into());
        }

        let from_account = self.accounts.get_mut(&event.from_account).ok_or_else(|| {
            HoldingsError::MissingAccount {
                symbol: self.symbol.clone(),
                account: event.from_account.clone(),
            }
        })?;

        let Some(mut moved) = from_account.take_transfer_candidate(entity.remaining_shares) else {
            warn!(
                "{}: no lot in '{}' holds exactly {} shares; transfer on {} not resolved",
                self.symbol, event.from_account, entity.remaining_shares, entity.date
            );
            return Ok(false);
        };

        moved.account = event.to_account.clone();
        let moved_quantity = moved.remaining_shares;
        self.accounts
            .entry(event.to_account.clone())
            .or_insert_with(|| Account::new(event.to_account.clone()))
            .add_entity(moved)?;

        if let Some(pending) = self.pending_transfers.get_mut(&event.from_account) {
            pending.remaining_shares -= moved_quantity;
        }
        debug!(
            "{}: transferred {} shares from '{}' to '{}'",
            self.symbol, moved_quantity, event.from_account, event.to_account
        );
        Ok(true)
    }

    /// Portfolio share count, excluding closed (`z`-prefixed) historical
    /// accounts.
    pub fn number_of_shares(&self) -> Decimal {
        self.total_shares(false)
    }

    /// Share count over accounts; closed historical containers are skipped
    /// unless `all_accounts` is requested, since their shares have moved via
    /// the event mechanism.
    pub fn total_shares(&self, all_accounts: bool) -> Decimal {
        self.accounts
            .values()
            .filter(|account| {
                all_accounts || !account.name.starts_with(CLOSED_ACCOUNT_PREFIX)
            })
            .map(|account| account.number_of_shares())
            .sum()
    }

    pub fn dividends(&self) -> Decimal {
        self.accounts.values().map(|a| a.dividends()).sum()
    }

    pub fn dividends_paid(&self) -> Decimal {
        self.accounts.values().map(|a| a.dividends_paid()).sum()
    }

    pub fn interest_income(&self) -> Decimal {
        self.accounts.values().map(|a| a.interest_income()).sum()
    }

    pub fn net_cost(&self) -> Decimal {
        self.accounts.values().map(|a| a.net_cost()).sum()
    }

    pub fn first_bought(&self) -> Option<NaiveDate> {
        self.accounts.values().filter_map(|a| a.first_bought()).min()
    }

    /// Net cost per held share; zero when nothing is held.
    pub fn average_price(&self) -> Decimal {
        let shares = self.number_of_shares();
        if shares <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.net_cost() / shares
    }

    pub fn get_account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }
}

/// Batch container replaying a transaction set into a map of tickers.
#[derive(Debug, Clone, Default)]
pub struct TickerSet {
    tickers: HashMap<String, Ticker>,
    events: Arc<TransferEventSet>,
}

impl TickerSet {
    /// An empty set whose tickers will share the given event calendar.
    pub fn new(events: Arc<TransferEventSet>) -> Self {
        TickerSet {
            tickers: HashMap::new(),
            events,
        }
    }

    /// Replays the batch in order, building entities and routing each to its
    /// symbol's ticker. A parse or reconciliation error aborts the load.
    pub fn load(&mut self, set: &TransactionSet) -> Result<()> {
        for transaction in set.iter() {
            let entity = Entity::from_transaction(transaction)?;
            let ticker = self
                .tickers
                .entry(entity.symbol.clone())
                .or_insert_with(|| Ticker::new(entity.symbol.clone(), Arc::clone(&self.events)));
            ticker.add_entity(entity)?;
        }
        Ok(())
    }

    pub fn get_ticker(&self, symbol: &str) -> Option<&Ticker> {
        self.tickers.get(symbol)
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.tickers.keys().cloned().collect();
        symbols.sort();
        symbols
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}
