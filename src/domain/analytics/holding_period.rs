//! Average holding period via FIFO lot matching.
//!
//! Each sell consumes buy lots from the front of that symbol's queue. Every
//! lot touched contributes one holding-day sample (weighted by lot count,
//! not by quantity); a partially consumed lot stays at the front with its
//! remaining quantity.

use crate::domain::transaction::{TradeAction, Transaction, sorted_by_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{HashMap, VecDeque};

pub fn average_holding_days(transactions: &[Transaction], as_of: NaiveDate) -> Decimal {
    let ordered = sorted_by_date(transactions);

    let mut samples: Vec<i64> = Vec::new();
    let mut lots: HashMap<&str, VecDeque<(NaiveDate, Decimal)>> = HashMap::new();

    for txn in &ordered {
        let queue = lots.entry(txn.symbol.as_str()).or_default();

        match txn.action {
            TradeAction::Buy => queue.push_back((txn.date, txn.quantity)),
            TradeAction::Sell => {
                let mut remaining = txn.quantity;

                while remaining > Decimal::ZERO {
                    let Some(front) = queue.front_mut() else {
                        break;
                    };
                    let (buy_date, lot_quantity) = *front;

                    let consumed = remaining.min(lot_quantity);
                    samples.push((txn.date - buy_date).num_days());
                    remaining -= consumed;

                    if consumed >= lot_quantity {
                        queue.pop_front();
                    } else {
                        front.1 = lot_quantity - consumed;
                    }
                }
            }
        }
    }

    if samples.is_empty() {
        // No completed round trip: age of the first buy, else zero.
        if let Some(first_buy) = ordered.iter().find(|t| t.action == TradeAction::Buy) {
            return Decimal::from((as_of - first_buy.date).num_days());
        }
        return Decimal::ZERO;
    }

    Decimal::from(samples.iter().sum::<i64>()) / Decimal::from(samples.len() as u64)
}
