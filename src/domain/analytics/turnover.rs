//! Annualized portfolio turnover.
//!
//! turnover = total sell value / ((total buys + total sells) / 2), scaled by
//! 365 / span-in-days (span floored at one day) and expressed in percent.

use crate::domain::transaction::{TradeAction, Transaction, sorted_by_date};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn turnover_rate(transactions: &[Transaction]) -> Decimal {
    if transactions.is_empty() {
        return Decimal::ZERO;
    }

    let ordered = sorted_by_date(transactions);
    let first_date = ordered[0].date;
    let last_date = ordered[ordered.len() - 1].date;

    let span_days = (last_date - first_date).num_days().max(1);
    let annualization = dec!(365) / Decimal::from(span_days);

    let total_buys: Decimal = ordered
        .iter()
        .filter(|t| t.action == TradeAction::Buy)
        .map(Transaction::total_value)
        .sum();
    let total_sells: Decimal = ordered
        .iter()
        .filter(|t| t.action == TradeAction::Sell)
        .map(Transaction::total_value)
        .sum();

    let avg_portfolio_value = (total_buys + total_sells) / dec!(2);
    if avg_portfolio_value.is_zero() {
        return Decimal::ZERO;
    }

    total_sells / avg_portfolio_value * annualization * dec!(100)
}
