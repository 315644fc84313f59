//! Behavioral trading statistics over a transaction history.

pub mod holding_period;
pub mod panic_sell;
pub mod turnover;
pub mod win_rate;

pub use holding_period::average_holding_days;
pub use panic_sell::panic_sell_ratio;
pub use turnover::turnover_rate;
pub use win_rate::win_rate;

use crate::domain::price::DailyMarketData;
use crate::domain::transaction::{Ticker, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// The four derived metrics the persona classifier consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingStats {
    pub avg_holding_days: Decimal,
    pub turnover_rate: Decimal,
    pub panic_sell_ratio: Decimal,
    pub win_rate: Decimal,
}

impl TradingStats {
    pub fn compute(
        transactions: &[Transaction],
        market_data: &[DailyMarketData],
        current_prices: &HashMap<Ticker, Decimal>,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            avg_holding_days: average_holding_days(transactions, as_of),
            turnover_rate: turnover_rate(transactions),
            panic_sell_ratio: panic_sell_ratio(transactions, market_data),
            win_rate: win_rate(transactions, current_prices),
        }
    }

    pub fn zero() -> Self {
        Self {
            avg_holding_days: Decimal::ZERO,
            turnover_rate: Decimal::ZERO,
            panic_sell_ratio: Decimal::ZERO,
            win_rate: Decimal::ZERO,
        }
    }

    /// Display rounding to one decimal place.
    pub fn rounded(&self) -> Self {
        Self {
            avg_holding_days: self.avg_holding_days.round_dp(1),
            turnover_rate: self.turnover_rate.round_dp(1),
            panic_sell_ratio: self.panic_sell_ratio.round_dp(1),
            win_rate: self.win_rate.round_dp(1),
        }
    }
}
