//! Counterfactual "do-nothing" benchmark simulation.
//!
//! What the initial investment would be worth had it bought the benchmark on
//! the first transaction date and never traded again, alongside the actual
//! portfolio's value over the same dates.

use crate::domain::portfolio;
use crate::domain::price::DailyPrice;
use crate::domain::transaction::{TradeAction, Ticker, Transaction, sorted_by_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

/// One day of the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub actual_value: Decimal,
    pub do_nothing_value: Decimal,
}

/// Return in percent of buying the benchmark at `start_price` with the full
/// initial investment and holding until `end_price`.
pub fn do_nothing_return(
    initial_investment: Decimal,
    start_price: Decimal,
    end_price: Decimal,
) -> Decimal {
    if start_price.is_zero() || initial_investment.is_zero() {
        return Decimal::ZERO;
    }

    let shares = initial_investment / start_price;
    let end_value = shares * end_price;

    (end_value - initial_investment) / initial_investment * dec!(100)
}

/// Parallel actual-vs-counterfactual value series over every benchmark date
/// from the first transaction onward. Empty when there is nothing to chart.
pub fn chart_series(
    transactions: &[Transaction],
    benchmark_prices: &[DailyPrice],
    portfolio_prices: &HashMap<Ticker, Vec<DailyPrice>>,
) -> Vec<ChartPoint> {
    if transactions.is_empty() || benchmark_prices.is_empty() {
        return Vec::new();
    }

    let ordered = sorted_by_date(transactions);
    let first_date = ordered[0].date;
    let initial_investment = portfolio::initial_investment(&ordered);

    let mut benchmark: Vec<&DailyPrice> = benchmark_prices
        .iter()
        .filter(|p| p.date >= first_date)
        .collect();
    benchmark.sort_by_key(|p| p.date);

    let Some(start_price) = benchmark.first().map(|p| p.close) else {
        return Vec::new();
    };
    if start_price.is_zero() {
        return Vec::new();
    }

    let shares = initial_investment / start_price;

    benchmark
        .iter()
        .map(|bar| ChartPoint {
            date: bar.date,
            actual_value: portfolio_value_on(&ordered, portfolio_prices, bar.date),
            do_nothing_value: shares * bar.close,
        })
        .collect()
}

/// Net held quantities as of `date`, each priced at the most recent close on
/// or before it (zero when no price is known).
fn portfolio_value_on(
    ordered: &[Transaction],
    portfolio_prices: &HashMap<Ticker, Vec<DailyPrice>>,
    date: NaiveDate,
) -> Decimal {
    let mut held: HashMap<&Ticker, Decimal> = HashMap::new();

    for txn in ordered.iter().filter(|t| t.date <= date) {
        let entry = held.entry(&txn.symbol).or_insert(Decimal::ZERO);
        match txn.action {
            TradeAction::Buy => *entry += txn.quantity,
            TradeAction::Sell => *entry -= txn.quantity,
        }
    }

    held.iter()
        .map(|(symbol, quantity)| {
            let Some(prices) = portfolio_prices.get(*symbol) else {
                return Decimal::ZERO;
            };
            let close = prices
                .iter()
                .filter(|p| p.date <= date)
                .max_by_key(|p| p.date)
                .map_or(Decimal::ZERO, |p| p.close);
            *quantity * close
        })
        .sum()
}
