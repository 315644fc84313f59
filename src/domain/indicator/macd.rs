//! Moving Average Convergence-Divergence.
//!
//! MACD line = EMA(fast) - EMA(slow), pointwise after dropping the first
//! slow-fast points of the fast series so both start at the slow offset.
//! Signal line = EMA(MACD line, signal). Only the latest line, signal, and
//! histogram are reported, rounded to 4 decimals.
//! Needs at least slow+signal closes.

use crate::domain::indicator::ema::calculate_ema;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacdResult {
    pub macd_line: Decimal,
    pub signal_line: Decimal,
    pub histogram: Decimal,
}

pub fn calculate_macd(
    closes: &[Decimal],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Option<MacdResult> {
    if fast == 0 || slow < fast || signal == 0 || closes.len() < slow + signal {
        return None;
    }

    let ema_fast = calculate_ema(closes, fast)?;
    let ema_slow = calculate_ema(closes, slow)?;

    let offset = slow - fast;
    let macd_line: Vec<Decimal> = ema_slow
        .iter()
        .enumerate()
        .map(|(i, slow_val)| ema_fast[i + offset] - slow_val)
        .collect();

    let signal_line = calculate_ema(&macd_line, signal)?;

    let latest_macd = *macd_line.last()?;
    let latest_signal = *signal_line.last()?;

    Some(MacdResult {
        macd_line: latest_macd.round_dp(4),
        signal_line: latest_signal.round_dp(4),
        histogram: (latest_macd - latest_signal).round_dp(4),
    })
}
