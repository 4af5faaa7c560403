//! Holdings module - share-lot reconciliation state.
//!
//! Leaf to root: `Lot` records a consumed slice of a holding, `Entity` wraps
//! one ledger row's holding, `Account` FIFO-matches entities for one ledger
//! account, `Ticker` owns the accounts for one symbol and applies the
//! transfer-event calendar, `TickerSet` replays a whole batch.

mod account;
mod entity;
mod holdings_errors;
mod ticker;
mod transfer_events;

pub use account::Account;
pub use entity::{Entity, Lot};
pub use holdings_errors::HoldingsError;
pub use ticker::{Ticker, TickerSet};
pub use transfer_events::{TransferEvent, TransferEventSet};


#[cfg(test)]
mod entity_tests;
