//! Account - FIFO matcher over the entities of one ledger account.

use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::entity::Entity;
use super::holdings_errors::HoldingsError;
use crate::constants::{FIRST_BOUGHT_MIN_SHARES, SHARE_TOLERANCE};
use crate::transactions::{
    is_buy_type, TRANSACTION_TYPE_BUY_BONDS, TRANSACTION_TYPE_REMOVE_SHARES,
    TRANSACTION_TYPE_SELL, TRANSACTION_TYPE_SELL_BONDS, TRANSACTION_TYPE_SHORT_SELL,
    TRANSACTION_TYPE_STOCK_SPLIT, TRANSFERABLE_TRANSACTION_TYPES,
};
use crate::utils::parse_decimal;

/// FIFO matcher holding the entities of one ledger account in insertion
/// (chronological) order, plus a queue of sell/removal requests that could
/// not be satisfied yet.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    entities: Vec<Entity>,
    pending: VecDeque<Entity>,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Account {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Routes one entity into the account: sells and removals consume
    /// existing entities FIFO, splits rescale every entity, bond redemptions
    /// drain bond lots, and everything else is appended as a new open entity.
    ///
    /// After an append, pending removals are retried oldest-first while the
    /// account holds more shares than its pending queue asks for and each
    /// retry consumes something.
    pub fn add_entity(&mut self, entity: Entity) -> Result<(), HoldingsError> {
        match entity.transaction_type.as_str() {
            TRANSACTION_TYPE_SELL | TRANSACTION_TYPE_SHORT_SELL => {
                self.sell_shares(entity);
                return Ok(());
            }
            TRANSACTION_TYPE_STOCK_SPLIT => {
                debug!("Stock split: {}", entity.symbol);
                return self.split_shares(&entity);
            }
            TRANSACTION_TYPE_REMOVE_SHARES => {
                self.remove_shares(entity);
                return Ok(());
            }
            TRANSACTION_TYPE_SELL_BONDS => {
                return self.sell_bonds(&entity);
            }
            _ => self.entities.push(entity),
        }

        while self.number_of_shares() > self.number_of_pending() {
            let outstanding = self.number_of_pending();
            match self.pending.pop_front() {
                Some(pending) => self.remove_shares(pending),
                None => break,
            }
            // A retry that shrank nothing means the held shares sit in
            // entities the FIFO walk cannot consume; stop until the next add.
            if self.number_of_pending() >= outstanding {
                break;
            }
        }
        Ok(())
    }

    /// FIFO walk consuming buy-type entities until the request is satisfied
    /// or the account runs dry; any leftover beyond tolerance is queued with
    /// the outstanding amount carried in `remaining_shares`.
    fn consume_shares(&mut self, mut entity: Entity, price_per_share: Decimal) {
        let mut outstanding = entity.remaining_shares.abs();
        for held in self.entities.iter_mut() {
            if is_buy_type(&held.transaction_type) {
                outstanding = held.sell_shares(outstanding, price_per_share);
            }
            if outstanding <= Decimal::ZERO {
                break;
            }
        }

        if outstanding > SHARE_TOLERANCE {
            warn!(
                "{}: {} shares of {} remaining to sell, queueing as pending",
                self.name, outstanding, entity.symbol
            );
            entity.remaining_shares = outstanding;
            self.pending.push_back(entity);
        }
    }

    /// Consumes shares at the triggering sale's price.
    pub fn sell_shares(&mut self, entity: Entity) {
        debug!(
            "{}: selling {} shares of {} at {}",
            self.name,
            entity.remaining_shares.abs(),
            entity.symbol,
            entity.price_per_share
        );
        let price = entity.price_per_share;
        self.consume_shares(entity, price);
    }

    /// Consumes shares with no proceeds (transfer out, custodial removal).
    pub fn remove_shares(&mut self, entity: Entity) {
        self.consume_shares(entity, Decimal::ZERO);
    }

    /// Bond maturity/redemption: every `Buy Bonds` entity is drained in
    /// full. A leftover means the ledger disagrees with the holding and is
    /// reported, not ignored.
    pub fn sell_bonds(&mut self, entity: &Entity) -> Result<(), HoldingsError> {
        debug!("Selling bonds: {}", entity.symbol);
        for held in self.entities.iter_mut() {
            if held.transaction_type == TRANSACTION_TYPE_BUY_BONDS {
                let quantity = held.shares;
                let leftover = held.sell_shares(quantity, Decimal::ZERO);
                if !leftover.is_zero() {
                    return Err(HoldingsError::BondOversell {
                        symbol: entity.symbol.clone(),
                        date: entity.date,
                        leftover,
                    });
                }
            }
        }
        Ok(())
    }

    /// Applies an `N for M` split, parsed from the split row's description,
    /// to every entity uniformly.
    pub fn split_shares(&mut self, entity: &Entity) -> Result<(), HoldingsError> {
        let parts: Vec<&str> = entity.description.split_whitespace().collect();
        if parts.len() < 3 {
            return Err(HoldingsError::InvalidSplitRatio {
                symbol: entity.symbol.clone(),
                description: entity.description.clone(),
            });
        }
        let (new_shares, old_shares) = match (parse_decimal(parts[0]), parse_decimal(parts[2])) {
            (Ok(new_shares), Ok(old_shares)) if !old_shares.is_zero() => (new_shares, old_shares),
            _ => {
                return Err(HoldingsError::InvalidSplitRatio {
                    symbol: entity.symbol.clone(),
                    description: entity.description.clone(),
                })
            }
        };

        debug!(
            "{}: split {} for {} on {}",
            self.name, new_shares, old_shares, entity.symbol
        );
        for held in self.entities.iter_mut() {
            held.split_shares(new_shares, old_shares);
        }
        Ok(())
    }

    /// Total remaining shares over all entities.
    pub fn number_of_shares(&self) -> Decimal {
        self.entities.iter().map(|e| e.remaining_shares).sum()
    }

    /// Total outstanding shares over the pending queue.
    pub fn number_of_pending(&self) -> Decimal {
        self.pending.iter().map(|e| e.remaining_shares.abs()).sum()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn dividends(&self) -> Decimal {
        self.entities.iter().map(|e| e.dividends()).sum()
    }

    pub fn dividends_paid(&self) -> Decimal {
        self.entities.iter().map(|e| e.dividends_paid()).sum()
    }

    pub fn interest_income(&self) -> Decimal {
        self.entities.iter().map(|e| e.interest_income()).sum()
    }

    pub fn net_cost(&self) -> Decimal {
        self.entities.iter().map(|e| e.net_cost()).sum()
    }

    /// Earliest date among buy-type entities still holding a meaningful
    /// quantity, or `None` when the account holds nothing.
    pub fn first_bought(&self) -> Option<NaiveDate> {
        self.entities
            .iter()
            .filter(|e| {
                is_buy_type(&e.transaction_type) && e.remaining_shares > FIRST_BOUGHT_MIN_SHARES
            })
            .map(|e| e.date)
            .min()
    }

    /// Net cost per remaining share; zero when the account holds no shares.
    pub fn average_cost(&self) -> Decimal {
        let shares = self.number_of_shares();
        if shares <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.net_cost() / shares
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Finds a buy-type entity whose remaining shares exactly equal the
    /// requested quantity, zeroes it, and returns a clone still carrying the
    /// quantity. Used by the ticker to move a lot between accounts on a
    /// transfer event. Matching on share count alone is ambiguous when two
    /// lots hold the same quantity; the first match wins and the ambiguity
    /// is logged.
    pub(super) fn take_transfer_candidate(&mut self, quantity: Decimal) -> Option<Entity> {
        let matches: Vec<usize> = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                TRANSFERABLE_TRANSACTION_TYPES.contains(&e.transaction_type.as_str())
                    && e.remaining_shares == quantity
            })
            .map(|(i, _)| i)
            .collect();

        let index = *matches.first()?;
        if matches.len() > 1 {
            warn!(
                "{}: {} lots with exactly {} remaining shares; transferring the oldest",
                self.name,
                matches.len(),
                quantity
            );
        }

        let moved = self.entities[index].clone();
        self.entities[index].remaining_shares = Decimal::ZERO;
        Some(moved)
    }
}
