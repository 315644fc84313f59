//! Panic-sell detection against a VIX time series.
//!
//! A sell is a panic sell when the VIX on (or, failing that, most recently
//! before) the sell date is at or above 25.

use crate::domain::price::DailyMarketData;
use crate::domain::transaction::{TradeAction, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

const HIGH_VIX_THRESHOLD: Decimal = dec!(25);

pub fn panic_sell_ratio(
    transactions: &[Transaction],
    market_data: &[DailyMarketData],
) -> Decimal {
    let sells: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.action == TradeAction::Sell)
        .collect();

    if sells.is_empty() {
        return Decimal::ZERO;
    }

    let vix_by_date: HashMap<NaiveDate, Decimal> =
        market_data.iter().map(|m| (m.date, m.vix)).collect();

    let panic_count = sells
        .iter()
        .filter(|sell| {
            let vix = vix_by_date.get(&sell.date).copied().or_else(|| {
                // Carry backward from the most recent prior day.
                market_data
                    .iter()
                    .filter(|m| m.date <= sell.date)
                    .max_by_key(|m| m.date)
                    .map(|m| m.vix)
            });

            matches!(vix, Some(v) if v >= HIGH_VIX_THRESHOLD)
        })
        .count();

    Decimal::from(panic_count as u64) / Decimal::from(sells.len() as u64) * dec!(100)
}
