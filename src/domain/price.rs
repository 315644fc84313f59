//! Daily price bars and macro market snapshots.

use crate::domain::transaction::Ticker;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One OHLCV bar per trading day per symbol. Source of truth for every
/// price-derived metric; the core only reads `close`, the rest is carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub symbol: Ticker,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: i64,
}

/// One macro snapshot per day, used for panic-sell detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMarketData {
    pub date: NaiveDate,
    pub vix: Decimal,
    pub spy_close: Decimal,
}

/// Closing prices in input order.
pub fn closes(prices: &[DailyPrice]) -> Vec<Decimal> {
    prices.iter().map(|p| p.close).collect()
}
