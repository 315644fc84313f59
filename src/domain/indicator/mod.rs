//! Technical indicators over a chronologically ordered closing-price series.
//!
//! Each indicator returns `None` when the series is too short; the bundled
//! entry point gates on the strictest requirement (MACD's slow+signal) and
//! returns no set at all below it.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;

pub use bollinger::{BollingerBands, calculate_bollinger};
pub use ema::calculate_ema;
pub use macd::{MacdResult, calculate_macd};
pub use rsi::calculate_rsi;

use crate::domain::price::{DailyPrice, closes};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

pub const RSI_PERIOD: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STDDEV_MULTIPLIER: Decimal = dec!(2);

/// Minimum closes before any indicator is attempted.
pub const MIN_CLOSES: usize = MACD_SLOW + MACD_SIGNAL;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalIndicatorSet {
    pub rsi: Option<Decimal>,
    pub macd: Option<MacdResult>,
    pub bollinger_bands: Option<BollingerBands>,
}

impl TechnicalIndicatorSet {
    /// All-or-nothing gate: below `MIN_CLOSES` bars no set is produced.
    pub fn calculate(prices: &[DailyPrice]) -> Option<Self> {
        if prices.len() < MIN_CLOSES {
            return None;
        }

        let closes = closes(prices);

        Some(Self {
            rsi: calculate_rsi(&closes, RSI_PERIOD),
            macd: calculate_macd(&closes, MACD_FAST, MACD_SLOW, MACD_SIGNAL),
            bollinger_bands: calculate_bollinger(
                &closes,
                BOLLINGER_PERIOD,
                BOLLINGER_STDDEV_MULTIPLIER,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Ticker;
    use chrono::NaiveDate;

    fn make_prices(len: usize) -> Vec<DailyPrice> {
        (0..len)
            .map(|i| {
                let close = Decimal::from(100 + (i * 3) % 17);
                DailyPrice {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
                        + chrono::Duration::days(i as i64),
                    symbol: Ticker::new("AAPL").unwrap(),
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 1000,
                }
            })
            .collect()
    }

    #[test]
    fn below_gate_returns_none() {
        assert!(TechnicalIndicatorSet::calculate(&make_prices(MIN_CLOSES - 1)).is_none());
    }

    #[test]
    fn at_gate_all_indicators_present() {
        let set = TechnicalIndicatorSet::calculate(&make_prices(MIN_CLOSES)).unwrap();
        assert!(set.rsi.is_some());
        assert!(set.macd.is_some());
        assert!(set.bollinger_bands.is_some());
    }

    #[test]
    fn empty_prices_return_none() {
        assert!(TechnicalIndicatorSet::calculate(&[]).is_none());
    }
}
