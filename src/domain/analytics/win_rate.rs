//! Win rate from FIFO price matching.
//!
//! Per-transaction matching: each sell consumes exactly one buy price from
//! the front of its symbol's queue, regardless of quantity. Leftover buys
//! are marked to market against the current price when one is known.

use crate::domain::transaction::{TradeAction, Transaction, Ticker, sorted_by_date};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, VecDeque};

pub fn win_rate(
    transactions: &[Transaction],
    current_prices: &HashMap<Ticker, Decimal>,
) -> Decimal {
    let ordered = sorted_by_date(transactions);

    let mut outcomes: Vec<bool> = Vec::new();
    let mut buy_prices: HashMap<Ticker, VecDeque<Decimal>> = HashMap::new();

    for txn in &ordered {
        let queue = buy_prices.entry(txn.symbol.clone()).or_default();

        match txn.action {
            TradeAction::Buy => queue.push_back(txn.price),
            TradeAction::Sell => {
                if let Some(buy_price) = queue.pop_front() {
                    outcomes.push(txn.price > buy_price);
                }
            }
        }
    }

    // Open positions count too, priced at the current market.
    for (symbol, queue) in &mut buy_prices {
        if let Some(&current_price) = current_prices.get(symbol) {
            while let Some(buy_price) = queue.pop_front() {
                outcomes.push(current_price > buy_price);
            }
        }
    }

    if outcomes.is_empty() {
        return Decimal::ZERO;
    }

    let wins = outcomes.iter().filter(|w| **w).count();
    Decimal::from(wins as u64) / Decimal::from(outcomes.len() as u64) * dec!(100)
}
