//! Portfolio valuation from a transaction history.

use crate::domain::transaction::{TradeAction, Ticker, Transaction, sorted_by_date};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Net held quantity per symbol (buys add, sells subtract).
pub fn holdings(transactions: &[Transaction]) -> HashMap<Ticker, Decimal> {
    let mut holdings: HashMap<Ticker, Decimal> = HashMap::new();

    for txn in sorted_by_date(transactions) {
        let entry = holdings.entry(txn.symbol.clone()).or_insert(Decimal::ZERO);
        match txn.action {
            TradeAction::Buy => *entry += txn.quantity,
            TradeAction::Sell => *entry -= txn.quantity,
        }
    }

    holdings
}

/// Sum of buy totals only; sells do not reduce the amount put in.
pub fn initial_investment(transactions: &[Transaction]) -> Decimal {
    transactions
        .iter()
        .filter(|t| t.action == TradeAction::Buy)
        .map(Transaction::total_value)
        .sum()
}

/// Net holdings priced at the current market; symbols without a known
/// price contribute zero.
pub fn current_value(
    transactions: &[Transaction],
    current_prices: &HashMap<Ticker, Decimal>,
) -> Decimal {
    holdings(transactions)
        .iter()
        .map(|(symbol, quantity)| {
            current_prices
                .get(symbol)
                .map_or(Decimal::ZERO, |price| quantity * price)
        })
        .sum()
}

pub fn return_pct(current_value: Decimal, initial_investment: Decimal) -> Decimal {
    if initial_investment.is_zero() {
        return Decimal::ZERO;
    }
    (current_value - initial_investment) / initial_investment * dec!(100)
}
