//! Transfer events - dated reclassification rules between accounts.
//!
//! When a custodian reclassifies a position (restricted stock vesting into a
//! brokerage account, an IRA rollover), the ledger records an unlinked
//! `Remove Shares` / `Add Shares` pair. The event calendar names those dates
//! and account pairs so the ticker can reroute them as one transfer instead
//! of a removal plus an uncosted add.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated reclassification rule: shares leave `from_account` and arrive
/// in `to_account` on `date`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    pub date: NaiveDate,
    pub from_account: String,
    pub to_account: String,
}

impl TransferEvent {
    pub fn new(
        date: NaiveDate,
        from_account: impl Into<String>,
        to_account: impl Into<String>,
    ) -> Self {
        TransferEvent {
            date,
            from_account: from_account.into(),
            to_account: to_account.into(),
        }
    }

    /// True when a removal on this date from this account is the source
    /// side of the event.
    pub fn matches_from(&self, date: NaiveDate, account: &str) -> bool {
        self.date == date && self.from_account == account
    }

    /// True when an addition on this date into this account is the
    /// destination side of the event.
    pub fn matches_to(&self, date: NaiveDate, account: &str) -> bool {
        self.date == date && self.to_account == account
    }
}

/// The event calendar loaded at construction and injected into tickers.
/// Adding a reclassification means adding a row here, not touching the
/// matching logic.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransferEventSet {
    events: Vec<TransferEvent>,
}

impl TransferEventSet {
    pub fn new(events: Vec<TransferEvent>) -> Self {
        TransferEventSet { events }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The historical reclassification calendar shipped with the ledger:
    /// restricted-stock vesting dates and the 2023 IRA rollovers.
    pub fn builtin() -> Self {
        let vesting = |y, m, d| {
            TransferEvent::new(
                NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                "z HD Restricted Stock",
                "HD ML Individual Account",
            )
        };
        TransferEventSet::new(vec![
            vesting(2020, 12, 28),
            vesting(2021, 3, 28),
            vesting(2022, 3, 23),
            vesting(2023, 3, 24),
            TransferEvent::new(
                NaiveDate::from_ymd_opt(2023, 9, 5).unwrap_or_default(),
                "z Ameritrade IRA",
                "Schwab Rollover IRA Keith",
            ),
            TransferEvent::new(
                NaiveDate::from_ymd_opt(2023, 9, 5).unwrap_or_default(),
                "z Jane IRA",
                "Schwab Contributory IRA Jane",
            ),
            vesting(2024, 3, 25),
        ])
    }

    /// True when some event names this date/account as its source side.
    pub fn matches_from(&self, date: NaiveDate, account: &str) -> bool {
        self.events.iter().any(|e| e.matches_from(date, account))
    }

    /// The event naming this date/account as its destination side, if any.
    pub fn find_to(&self, date: NaiveDate, account: &str) -> Option<&TransferEvent> {
        self.events.iter().find(|e| e.matches_to(date, account))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
