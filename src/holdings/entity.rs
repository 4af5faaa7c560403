//! Entity and Lot - the per-transaction holding wrapper and its sale records.

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::transactions::{
    Transaction, PRICED_TRANSACTION_TYPES, TRANSACTION_TYPE_DIVIDEND_INCOME,
    TRANSACTION_TYPE_INTEREST_INCOME, TRANSACTION_TYPE_LT_CAPITAL_GAIN,
    TRANSACTION_TYPE_REINVEST_DIVIDEND, TRANSACTION_TYPE_REINVEST_LT_GAIN,
    TRANSACTION_TYPE_REINVEST_ST_GAIN, TRANSACTION_TYPE_RETURN_OF_CAPITAL,
    TRANSACTION_TYPE_ST_CAPITAL_GAIN,
};
use crate::utils::parse_decimal;

/// Record of a quantity consumed from one entity by a sale or removal.
/// Immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub number_shares: Decimal,
    pub price_per_share: Decimal,
    pub sold_date: DateTime<Utc>,
}

impl Lot {
    pub fn new(number_shares: Decimal, price_per_share: Decimal, sold_date: DateTime<Utc>) -> Self {
        Lot {
            number_shares,
            price_per_share,
            sold_date,
        }
    }

    /// Cash realized by this lot.
    pub fn proceeds(&self) -> Decimal {
        self.number_shares * self.price_per_share
    }
}

/// Mutable per-transaction share-lot tracker, created 1:1 from a ledger row.
///
/// Owned exclusively by one `Account` once added. Mutated only by
/// `sell_shares` and `split_shares`; never deleted, only drained to zero
/// remaining shares.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
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
    pub price_per_share: Decimal,
    pub remaining_shares: Decimal,
    pub sold_lots: Vec<Lot>,
}

impl Entity {
    /// Builds an entity from a ledger row. For priced types (buys, reinvested
    /// dividends, sells) the price per share is recovered from the trailing
    /// description token (`"100 shares @ 55.00"`); a description with an
    /// unexpected shape leaves the price at zero, a malformed numeric token
    /// aborts the batch.
    pub fn from_transaction(transaction: &Transaction) -> Result<Self> {
        let mut entity = Entity {
            date: transaction.date,
            transaction_type: transaction.transaction_type.clone(),
            security: transaction.security.clone(),
            symbol: transaction.symbol.clone(),
            security_payee: transaction.security_payee.clone(),
            description: transaction.description.clone(),
            shares: transaction.shares,
            investment_amount: transaction.investment_amount,
            amount: transaction.amount,
            account: transaction.account.clone(),
            price_per_share: Decimal::ZERO,
            remaining_shares: transaction.shares,
            sold_lots: Vec::new(),
        };

        if PRICED_TRANSACTION_TYPES.contains(&entity.transaction_type.as_str()) {
            let parts: Vec<&str> = entity.description.split_whitespace().collect();
            if parts.len() == 4 {
                entity.price_per_share = parse_decimal(parts[3])?;
            } else {
                warn!(
                    "No price per share in description '{}' for {} {}",
                    entity.description, entity.symbol, entity.date
                );
            }
        }
        Ok(entity)
    }

    /// Consumes up to `quantity` shares from this entity, recording a lot at
    /// the given price, and returns the quantity still outstanding.
    ///
    /// A drained entity passes the request through untouched.
    pub fn sell_shares(&mut self, quantity: Decimal, price_per_share: Decimal) -> Decimal {
        if self.remaining_shares <= Decimal::ZERO {
            return quantity;
        }

        if self.remaining_shares >= quantity {
            // Partial or full sale satisfied entirely by this entity.
            self.remaining_shares -= quantity;
            self.sold_lots
                .push(Lot::new(quantity, price_per_share, Utc::now()));
            return Decimal::ZERO;
        }

        // This entity drains; the caller keeps walking with the leftover.
        let leftover = quantity - self.remaining_shares;
        self.sold_lots
            .push(Lot::new(self.remaining_shares, price_per_share, Utc::now()));
        self.remaining_shares = Decimal::ZERO;
        leftover
    }

    /// Rescales remaining shares by `new/old`. Drained entities are left
    /// untouched.
    pub fn split_shares(&mut self, new_shares: Decimal, old_shares: Decimal) {
        if self.remaining_shares <= Decimal::ZERO {
            return;
        }
        self.remaining_shares = self.remaining_shares / old_shares * new_shares;
    }

    /// The cash amount when present, otherwise the investment amount.
    /// Reinvested distributions carry their value in the investment column.
    fn amount_for_type(&self, income_type: &str) -> Decimal {
        if self.transaction_type == income_type {
            if self.amount > Decimal::ZERO {
                return self.amount;
            }
            return self.investment_amount;
        }
        Decimal::ZERO
    }

    pub fn dividend_income(&self) -> Decimal {
        self.amount_for_type(TRANSACTION_TYPE_DIVIDEND_INCOME)
            + self.amount_for_type(TRANSACTION_TYPE_REINVEST_DIVIDEND)
    }

    pub fn long_term_capital_gain(&self) -> Decimal {
        self.amount_for_type(TRANSACTION_TYPE_LT_CAPITAL_GAIN)
            + self.amount_for_type(TRANSACTION_TYPE_REINVEST_LT_GAIN)
    }

    pub fn short_term_capital_gain(&self) -> Decimal {
        self.amount_for_type(TRANSACTION_TYPE_ST_CAPITAL_GAIN)
            + self.amount_for_type(TRANSACTION_TYPE_REINVEST_ST_GAIN)
    }

    pub fn interest_income(&self) -> Decimal {
        match self.transaction_type.as_str() {
            TRANSACTION_TYPE_INTEREST_INCOME | "Int Inc" | "int inc" => self.amount,
            _ => Decimal::ZERO,
        }
    }

    /// Dividend, interest and capital-gain income generated by this row.
    pub fn dividends(&self) -> Decimal {
        self.dividend_income()
            + self.interest_income()
            + self.long_term_capital_gain()
            + self.short_term_capital_gain()
    }

    /// Cash-received variant: reinvested distribution types report the cash
    /// amount reinvested, not the share value.
    pub fn dividends_paid(&self) -> Decimal {
        match self.transaction_type.as_str() {
            TRANSACTION_TYPE_DIVIDEND_INCOME => self.amount,
            TRANSACTION_TYPE_RETURN_OF_CAPITAL => self.amount,
            TRANSACTION_TYPE_REINVEST_DIVIDEND => self.investment_amount,
            TRANSACTION_TYPE_REINVEST_LT_GAIN => self.investment_amount,
            TRANSACTION_TYPE_ST_CAPITAL_GAIN => self.amount,
            TRANSACTION_TYPE_REINVEST_ST_GAIN => self.amount,
            _ => Decimal::ZERO,
        }
    }

    /// Cost still tied up in this entity: the absolute purchase amount minus
    /// proceeds of every lot sold from it. Zero once fully drained.
    pub fn net_cost(&self) -> Decimal {
        if !crate::transactions::is_buy_type(&self.transaction_type)
            || self.remaining_shares <= Decimal::ZERO
        {
            return Decimal::ZERO;
        }
        let mut amount = self.amount.abs();
        for lot in &self.sold_lots {
            amount -= lot.proceeds();
        }
        amount
    }
}
