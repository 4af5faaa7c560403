//! Tests for Entity and Lot.

#[cfg(test)]
mod tests {
    use crate::holdings::Entity;
    use crate::transactions::Transaction;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entity(transaction_type: &str, shares: Decimal, amount: Decimal) -> Entity {
        Entity {
            date: date(2021, 3, 9),
            transaction_type: transaction_type.to_string(),
            security: "Home Depot".to_string(),
            symbol: "HD".to_string(),
            security_payee: String::new(),
            description: String::new(),
            shares,
            investment_amount: Decimal::ZERO,
            amount,
            account: "Brokerage".to_string(),
            price_per_share: Decimal::ZERO,
            remaining_shares: shares,
            sold_lots: Vec::new(),
        }
    }

    fn transaction(transaction_type: &str, description: &str) -> Transaction {
        Transaction {
            id: 1,
            date: date(2021, 3, 9),
            transaction_type: transaction_type.to_string(),
            security: "Home Depot".to_string(),
            symbol: "HD".to_string(),
            security_payee: String::new(),
            description: description.to_string(),
            shares: dec!(100),
            investment_amount: dec!(5000),
            amount: dec!(-5000),
            account: "Brokerage".to_string(),
        }
    }

    #[test]
    fn test_sell_shares_partial() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        let leftover = held.sell_shares(dec!(60), dec!(55));

        assert_eq!(leftover, Decimal::ZERO);
        assert_eq!(held.remaining_shares, dec!(40));
        assert_eq!(held.sold_lots.len(), 1);
        assert_eq!(held.sold_lots[0].number_shares, dec!(60));
        assert_eq!(held.sold_lots[0].price_per_share, dec!(55));
        assert_eq!(held.sold_lots[0].proceeds(), dec!(3300));
    }

    #[test]
    fn test_sell_shares_overflow_returns_leftover() {
        let mut held = entity("Buy", dec!(50), dec!(-2500));
        let leftover = held.sell_shares(dec!(100), dec!(55));

        assert_eq!(leftover, dec!(50));
        assert_eq!(held.remaining_shares, Decimal::ZERO);
        assert_eq!(held.sold_lots.len(), 1);
        assert_eq!(held.sold_lots[0].number_shares, dec!(50));
    }

    #[test]
    fn test_sell_shares_drained_entity_passes_through() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        held.sell_shares(dec!(100), dec!(50));
        assert_eq!(held.remaining_shares, Decimal::ZERO);

        let leftover = held.sell_shares(dec!(25), dec!(50));
        assert_eq!(leftover, dec!(25));
        assert_eq!(held.sold_lots.len(), 1);
    }

    #[test]
    fn test_sold_lots_account_for_consumed_shares() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        held.sell_shares(dec!(30), dec!(51));
        held.sell_shares(dec!(20), dec!(52));

        let consumed: Decimal = held.sold_lots.iter().map(|l| l.number_shares).sum();
        assert_eq!(held.shares - held.remaining_shares, consumed);
        assert!(held.remaining_shares >= Decimal::ZERO);
        assert!(held.remaining_shares <= held.shares);
    }

    #[test]
    fn test_split_shares_rescales_remaining() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        held.split_shares(dec!(2), dec!(1));
        assert_eq!(held.remaining_shares, dec!(200));

        held.split_shares(dec!(3), dec!(2));
        assert_eq!(held.remaining_shares, dec!(300));
    }

    #[test]
    fn test_split_shares_skips_drained_entity() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        held.sell_shares(dec!(100), dec!(55));
        held.split_shares(dec!(2), dec!(1));
        assert_eq!(held.remaining_shares, Decimal::ZERO);
    }

    #[test]
    fn test_from_transaction_parses_price_per_share() {
        let held = Entity::from_transaction(&transaction("Buy", "100 shares @ 50.00")).unwrap();
        assert_eq!(held.price_per_share, dec!(50.00));
        assert_eq!(held.remaining_shares, dec!(100));
        assert_eq!(held.shares, dec!(100));
    }

    #[test]
    fn test_from_transaction_unexpected_description_leaves_price_zero() {
        let held = Entity::from_transaction(&transaction("Buy", "transfer from savings")).unwrap();
        assert_eq!(held.price_per_share, Decimal::ZERO);
    }

    #[test]
    fn test_from_transaction_malformed_price_is_error() {
        assert!(Entity::from_transaction(&transaction("Buy", "100 shares @ fifty")).is_err());
    }

    #[test]
    fn test_from_transaction_unpriced_type_skips_description() {
        let held =
            Entity::from_transaction(&transaction("Dividend Income", "quarterly @ div x")).unwrap();
        assert_eq!(held.price_per_share, Decimal::ZERO);
    }

    #[test]
    fn test_dividend_income_uses_amount_or_investment() {
        let mut cash = entity("Dividend Income", Decimal::ZERO, dec!(12.50));
        assert_eq!(cash.dividend_income(), dec!(12.50));
        assert_eq!(cash.dividends(), dec!(12.50));

        cash.amount = Decimal::ZERO;
        cash.investment_amount = dec!(8.75);
        assert_eq!(cash.dividend_income(), dec!(8.75));

        let mut reinvested = entity("Reinvest Dividend", dec!(2), Decimal::ZERO);
        reinvested.investment_amount = dec!(25.00);
        assert_eq!(reinvested.dividend_income(), dec!(25.00));
    }

    #[test]
    fn test_interest_income_aliases() {
        for alias in ["Interest Income", "Int Inc", "int inc"] {
            let held = entity(alias, Decimal::ZERO, dec!(3.21));
            assert_eq!(held.interest_income(), dec!(3.21), "alias {alias}");
        }
        let held = entity("Dividend Income", Decimal::ZERO, dec!(3.21));
        assert_eq!(held.interest_income(), Decimal::ZERO);
    }

    #[test]
    fn test_capital_gains_classification() {
        let lt = entity("Long-term Capital Gain", Decimal::ZERO, dec!(40));
        assert_eq!(lt.long_term_capital_gain(), dec!(40));

        let mut reinvest_lt = entity("Reinvest Long-term Capital Gain", dec!(1), Decimal::ZERO);
        reinvest_lt.investment_amount = dec!(15);
        assert_eq!(reinvest_lt.long_term_capital_gain(), dec!(15));

        let st = entity("Short-term Capital Gain", Decimal::ZERO, dec!(7));
        assert_eq!(st.short_term_capital_gain(), dec!(7));
        assert_eq!(st.dividends(), dec!(7));
    }

    #[test]
    fn test_dividends_paid_uses_cash_received() {
        let mut reinvested = entity("Reinvest Dividend", dec!(2), Decimal::ZERO);
        reinvested.investment_amount = dec!(25.00);
        assert_eq!(reinvested.dividends_paid(), dec!(25.00));

        let cash = entity("Dividend Income", Decimal::ZERO, dec!(12.50));
        assert_eq!(cash.dividends_paid(), dec!(12.50));

        let buy = entity("Buy", dec!(100), dec!(-5000));
        assert_eq!(buy.dividends_paid(), Decimal::ZERO);
    }

    #[test]
    fn test_net_cost_declines_with_sales() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        assert_eq!(held.net_cost(), dec!(5000));

        held.sell_shares(dec!(60), dec!(55));
        assert_eq!(held.net_cost(), dec!(1700));
    }

    #[test]
    fn test_net_cost_zero_after_close() {
        let mut held = entity("Buy", dec!(100), dec!(-5000));
        held.sell_shares(dec!(100), dec!(10));
        assert_eq!(held.remaining_shares, Decimal::ZERO);
        assert_eq!(held.net_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_net_cost_zero_for_non_buy_types() {
        let held = entity("Sell", dec!(-100), dec!(5500));
        assert_eq!(held.net_cost(), Decimal::ZERO);
    }
}
