//! Crate-wide constants for lot matching and reporting.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Sell/removal leftovers at or below this many shares are treated as fully
/// matched; anything above it is queued as pending.
pub const SHARE_TOLERANCE: Decimal = dec!(0.02);

/// Minimum remaining shares for a buy entity to count toward the
/// first-bought date.
pub const FIRST_BOUGHT_MIN_SHARES: Decimal = dec!(0.1);

/// Earliest ledger year accepted by month-scoped queries.
pub const MIN_LEDGER_YEAR: i32 = 1980;

/// Accounts whose name starts with this prefix are historical containers
/// whose shares have since moved elsewhere via transfer events; they are
/// excluded from portfolio totals to avoid double counting.
pub const CLOSED_ACCOUNT_PREFIX: char = 'z';
