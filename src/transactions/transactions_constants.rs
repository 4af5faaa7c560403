/// Transaction types
///
/// Each constant is a transaction type as it appears in the brokerage
/// ledger export. Types not listed here pass through the matcher as plain
/// holdings rows.

/// Purchase of a security. Opens a new lot.
pub const TRANSACTION_TYPE_BUY: &str = "Buy";

/// Purchase of a bond position. Opens a new lot; closed only by `Sell Bonds`.
pub const TRANSACTION_TYPE_BUY_BONDS: &str = "Buy Bonds";

/// Shares added without a purchase (transfer in, vesting). Opens a new lot.
pub const TRANSACTION_TYPE_ADD_SHARES: &str = "Add Shares";

/// Disposal of shares at a price. Consumes lots FIFO.
pub const TRANSACTION_TYPE_SELL: &str = "Sell";

/// Short sale. Treated identically to `Sell` by the matcher.
pub const TRANSACTION_TYPE_SHORT_SELL: &str = "Short Sell";

/// Shares removed without proceeds (transfer out). Consumes lots FIFO at
/// zero price.
pub const TRANSACTION_TYPE_REMOVE_SHARES: &str = "Remove Shares";

/// Bond maturity or redemption. Drains every `Buy Bonds` lot in full.
pub const TRANSACTION_TYPE_SELL_BONDS: &str = "Sell Bonds";

/// Stock split. Rescales remaining shares of every lot in the account.
pub const TRANSACTION_TYPE_STOCK_SPLIT: &str = "Stock Split";

/// Cash dividend received.
pub const TRANSACTION_TYPE_DIVIDEND_INCOME: &str = "Dividend Income";

/// Dividend reinvested into new shares. Opens a new lot.
pub const TRANSACTION_TYPE_REINVEST_DIVIDEND: &str = "Reinvest Dividend";

/// Interest received on cash or fixed income.
pub const TRANSACTION_TYPE_INTEREST_INCOME: &str = "Interest Income";

/// Long-term capital gain distribution, paid in cash.
pub const TRANSACTION_TYPE_LT_CAPITAL_GAIN: &str = "Long-term Capital Gain";

/// Short-term capital gain distribution, paid in cash.
pub const TRANSACTION_TYPE_ST_CAPITAL_GAIN: &str = "Short-term Capital Gain";

/// Long-term capital gain distribution reinvested into new shares.
pub const TRANSACTION_TYPE_REINVEST_LT_GAIN: &str = "Reinvest Long-term Capital Gain";

/// Short-term capital gain distribution reinvested into new shares.
pub const TRANSACTION_TYPE_REINVEST_ST_GAIN: &str = "Reinvest Short-term Capital Gain";

/// Return of capital distribution.
pub const TRANSACTION_TYPE_RETURN_OF_CAPITAL: &str = "Return of Capital";

/// Transaction types that open lots eligible for FIFO consumption.
pub const BUY_TRANSACTION_TYPES: [&str; 6] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_BUY_BONDS,
    TRANSACTION_TYPE_ADD_SHARES,
    TRANSACTION_TYPE_REINVEST_DIVIDEND,
    TRANSACTION_TYPE_REINVEST_LT_GAIN,
    TRANSACTION_TYPE_REINVEST_ST_GAIN,
];

/// Buy-type transactions eligible as the source of an event-driven
/// cross-account transfer.
pub const TRANSFERABLE_TRANSACTION_TYPES: [&str; 3] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_BUY_BONDS,
    TRANSACTION_TYPE_REINVEST_DIVIDEND,
];

/// Transaction types whose description carries a trailing price-per-share
/// token (`"100 shares @ 55.00"`).
pub const PRICED_TRANSACTION_TYPES: [&str; 3] = [
    TRANSACTION_TYPE_BUY,
    TRANSACTION_TYPE_REINVEST_DIVIDEND,
    TRANSACTION_TYPE_SELL,
];

/// Checks if a transaction type opens lots eligible for FIFO consumption.
pub fn is_buy_type(transaction_type: &str) -> bool {
    BUY_TRANSACTION_TYPES.contains(&transaction_type)
}
