//! Verdict text for the benchmark comparison.
//!
//! Fixed banding on performance drag (actual return minus do-nothing
//! return): -20 / -5 / +5 / +20 percentage points.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn verdict(performance_drag: Decimal) -> String {
    let drag_abs = performance_drag.abs();

    if performance_drag < dec!(-20) {
        format!(
            "Your active trading cost you {drag_abs:.1}% in returns. Consider a passive approach."
        )
    } else if performance_drag < dec!(-5) {
        format!(
            "Your trading decisions underperformed by {drag_abs:.1}%. There's room for improvement."
        )
    } else if performance_drag < dec!(5) {
        "Your performance is roughly in line with a passive strategy. Keep it simple!".to_string()
    } else if performance_drag < dec!(20) {
        format!("Your trading added {performance_drag:.1}% value. Nice work!")
    } else {
        format!(
            "Exceptional trading! You outperformed by {performance_drag:.1}%. You might be onto something."
        )
    }
}
