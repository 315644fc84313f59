//! Relative Strength Index with Wilder smoothing.
//!
//! Seed average gain/loss is the plain mean of the first n deltas, then
//! avg = (avg*(n-1) + value)/n per subsequent delta.
//! RSI = 100 - 100/(1 + avg_gain/avg_loss); 100 when avg_loss is zero.
//! Needs at least n+1 closes.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn calculate_rsi(closes: &[Decimal], period: usize) -> Option<Decimal> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let deltas: Vec<Decimal> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let p = Decimal::from(period as u64);

    let mut avg_gain = Decimal::ZERO;
    let mut avg_loss = Decimal::ZERO;
    for delta in &deltas[..period] {
        if *delta > Decimal::ZERO {
            avg_gain += *delta;
        } else {
            avg_loss += delta.abs();
        }
    }
    avg_gain /= p;
    avg_loss /= p;

    for delta in &deltas[period..] {
        let gain = if *delta > Decimal::ZERO {
            *delta
        } else {
            Decimal::ZERO
        };
        let loss = if *delta < Decimal::ZERO {
            delta.abs()
        } else {
            Decimal::ZERO
        };

        avg_gain = (avg_gain * (p - Decimal::ONE) + gain) / p;
        avg_loss = (avg_loss * (p - Decimal::ONE) + loss) / p;
    }

    if avg_loss.is_zero() {
        return Some(dec!(100));
    }

    let rs = avg_gain / avg_loss;
    Some((dec!(100) - dec!(100) / (Decimal::ONE + rs)).round_dp(2))
}
