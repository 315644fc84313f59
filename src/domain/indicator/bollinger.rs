//! Bollinger Bands.
//!
//! Over the most recent n closes: middle = SMA, bands at +/- k population
//! standard deviations (divide by N, not N-1), rounded to 4 decimals.
//! The square root runs through f64; every other step stays in Decimal.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BollingerBands {
    pub upper: Decimal,
    pub middle: Decimal,
    pub lower: Decimal,
}

pub fn calculate_bollinger(
    closes: &[Decimal],
    period: usize,
    stddev_multiplier: Decimal,
) -> Option<BollingerBands> {
    if period == 0 || closes.len() < period {
        return None;
    }

    let window = &closes[closes.len() - period..];
    let p = Decimal::from(period as u64);

    let sma = window.iter().copied().sum::<Decimal>() / p;
    let variance = window
        .iter()
        .map(|c| (*c - sma) * (*c - sma))
        .sum::<Decimal>()
        / p;

    let stddev = variance
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .unwrap_or(Decimal::ZERO);

    Some(BollingerBands {
        upper: (sma + stddev_multiplier * stddev).round_dp(4),
        middle: sma.round_dp(4),
        lower: (sma - stddev_multiplier * stddev).round_dp(4),
    })
}
