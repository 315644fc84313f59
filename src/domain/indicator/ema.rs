//! Exponential Moving Average.
//!
//! Multiplier k = 2/(n+1), seeded with the SMA of the first n points, then
//! ema[i] = (data[n+i-1] - ema[i-1]) * k + ema[i-1].
//! Output length is len(data) - n + 1; fewer than n points is insufficient.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn calculate_ema(data: &[Decimal], period: usize) -> Option<Vec<Decimal>> {
    if period == 0 || data.len() < period {
        return None;
    }

    let p = Decimal::from(period as u64);
    let multiplier = dec!(2) / (p + Decimal::ONE);

    let seed = data[..period].iter().copied().sum::<Decimal>() / p;
    let mut ema = Vec::with_capacity(data.len() - period + 1);
    ema.push(seed);

    for i in 1..=(data.len() - period) {
        let prev = ema[i - 1];
        ema.push((data[period + i - 1] - prev) * multiplier + prev);
    }

    Some(ema)
}
