//! Port-driven orchestration of the four analyses.
//!
//! Fetch failures never fail a request: a missing VIX becomes 20, a missing
//! RSI becomes 50, missing series become empty, and the calculators handle
//! the rest with their own degenerate-input branches.

use crate::domain::analytics::TradingStats;
use crate::domain::benchmark::{self, ChartPoint};
use crate::domain::date_range::DateRange;
use crate::domain::indicator::{RSI_PERIOD, TechnicalIndicatorSet, calculate_rsi};
use crate::domain::mood::{
    self, MarketFactor, MoodScore, Trend, WeatherType,
};
use crate::domain::persona::{self, PersonaId};
use crate::domain::portfolio;
use crate::domain::price::{DailyPrice, closes};
use crate::domain::transaction::{Ticker, Transaction, sorted_by_date};
use crate::domain::verdict::verdict;
use crate::ports::market_data_port::MarketDataPort;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashMap;

/// Neutral substitutes when a fetch fails.
pub const NEUTRAL_VIX: Decimal = dec!(20);
pub const NEUTRAL_RSI: Decimal = dec!(50);

/// History window fetched for the benchmark RSI.
const RSI_LOOKBACK_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketWeatherReport {
    pub mood_score: i32,
    pub weather: WeatherType,
    pub trend: Trend,
    pub factors: Vec<MarketFactor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaReport {
    pub persona_id: PersonaId,
    pub display_name: &'static str,
    pub traits: Vec<&'static str>,
    pub description: &'static str,
    pub advice: &'static str,
    pub stats: TradingStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub actual_return_pct: Decimal,
    pub do_nothing_return_pct: Decimal,
    pub performance_drag: Decimal,
    pub verdict: String,
    pub chart: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReport {
    pub symbol: Ticker,
    pub indicators: Option<TechnicalIndicatorSet>,
}

/// Any of the four analysis outputs, for report rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Weather(MarketWeatherReport),
    Persona(PersonaReport),
    Simulation(SimulationReport),
    Indicators(IndicatorReport),
}

/// Current market mood from the live VIX and the benchmark's RSI.
pub fn market_weather(
    port: &dyn MarketDataPort,
    benchmark: &Ticker,
    previous_score: Option<MoodScore>,
    as_of: NaiveDate,
) -> MarketWeatherReport {
    let vix = port.current_vix().unwrap_or(NEUTRAL_VIX);
    let rsi = benchmark_rsi(port, benchmark, as_of).unwrap_or(NEUTRAL_RSI);

    let score = mood::mood_score(vix, rsi);

    MarketWeatherReport {
        mood_score: score.value(),
        weather: mood::classify_weather(score),
        trend: mood::analyze_trend(score, previous_score),
        factors: mood::market_factors(vix, rsi),
    }
}

fn benchmark_rsi(
    port: &dyn MarketDataPort,
    benchmark: &Ticker,
    as_of: NaiveDate,
) -> Option<Decimal> {
    let range = DateRange::new(as_of - Duration::days(RSI_LOOKBACK_DAYS), as_of).ok()?;
    let mut prices = port.historical_prices(benchmark, &range).ok()?;
    prices.sort_by_key(|p| p.date);
    calculate_rsi(&closes(&prices), RSI_PERIOD)
}

/// Behavioral persona from the transaction history.
pub fn persona_analysis(
    port: &dyn MarketDataPort,
    transactions: &[Transaction],
    as_of: NaiveDate,
) -> PersonaReport {
    let ordered = sorted_by_date(transactions);

    let Some(first) = ordered.first() else {
        return persona_report(PersonaId::Hodler, TradingStats::zero());
    };

    let end = as_of.max(first.date);
    let Ok(range) = DateRange::new(first.date, end) else {
        return persona_report(PersonaId::Hodler, TradingStats::zero());
    };

    let market_data = port.market_data(&range).unwrap_or_default();
    let current_prices = latest_prices(port, &ordered, &range);

    let stats = TradingStats::compute(&ordered, &market_data, &current_prices, as_of);
    let persona = persona::classify(&stats);

    persona_report(persona, stats.rounded())
}

fn persona_report(persona: PersonaId, stats: TradingStats) -> PersonaReport {
    let info = persona.info();
    PersonaReport {
        persona_id: persona,
        display_name: info.display_name,
        traits: info.traits.to_vec(),
        description: info.description,
        advice: info.advice,
        stats,
    }
}

/// The counterfactual benchmark comparison.
pub fn do_nothing_simulation(
    port: &dyn MarketDataPort,
    transactions: &[Transaction],
    benchmark: &Ticker,
    as_of: NaiveDate,
) -> SimulationReport {
    let ordered = sorted_by_date(transactions);

    let Some(first) = ordered.first() else {
        return empty_simulation();
    };
    let end = as_of.max(first.date);
    let Ok(range) = DateRange::new(first.date, end) else {
        return empty_simulation();
    };

    let mut benchmark_prices = port.historical_prices(benchmark, &range).unwrap_or_default();
    benchmark_prices.sort_by_key(|p| p.date);

    let portfolio_prices = fetch_portfolio_prices(port, &ordered, &range);
    let current_prices: HashMap<Ticker, Decimal> = portfolio_prices
        .iter()
        .map(|(symbol, prices)| {
            let latest = prices
                .iter()
                .max_by_key(|p| p.date)
                .map_or(Decimal::ZERO, |p| p.close);
            (symbol.clone(), latest)
        })
        .collect();

    let initial_investment = portfolio::initial_investment(&ordered);
    let current_value = portfolio::current_value(&ordered, &current_prices);
    let actual_return = portfolio::return_pct(current_value, initial_investment);

    let start_price = benchmark_prices
        .first()
        .map_or(Decimal::ZERO, |p| p.close);
    let end_price = benchmark_prices
        .last()
        .map_or(Decimal::ZERO, |p| p.close);
    let do_nothing_return =
        benchmark::do_nothing_return(initial_investment, start_price, end_price);

    let performance_drag = actual_return - do_nothing_return;

    let chart = benchmark::chart_series(&ordered, &benchmark_prices, &portfolio_prices)
        .into_iter()
        .map(|point| ChartPoint {
            date: point.date,
            actual_value: point.actual_value.round_dp(2),
            do_nothing_value: point.do_nothing_value.round_dp(2),
        })
        .collect();

    SimulationReport {
        actual_return_pct: actual_return.round_dp(2),
        do_nothing_return_pct: do_nothing_return.round_dp(2),
        performance_drag: performance_drag.round_dp(2),
        verdict: verdict(performance_drag),
        chart,
    }
}

fn empty_simulation() -> SimulationReport {
    SimulationReport {
        actual_return_pct: Decimal::ZERO,
        do_nothing_return_pct: Decimal::ZERO,
        performance_drag: Decimal::ZERO,
        verdict: "No transactions to analyze.".to_string(),
        chart: Vec::new(),
    }
}

/// Technical indicators for one symbol over a date range.
pub fn stock_indicators(
    port: &dyn MarketDataPort,
    symbol: &Ticker,
    range: &DateRange,
) -> IndicatorReport {
    let mut prices = port.historical_prices(symbol, range).unwrap_or_default();
    prices.sort_by_key(|p| p.date);

    IndicatorReport {
        symbol: symbol.clone(),
        indicators: TechnicalIndicatorSet::calculate(&prices),
    }
}

fn unique_symbols(ordered: &[Transaction]) -> Vec<Ticker> {
    let mut symbols: Vec<Ticker> = Vec::new();
    for txn in ordered {
        if !symbols.contains(&txn.symbol) {
            symbols.push(txn.symbol.clone());
        }
    }
    symbols
}

fn fetch_portfolio_prices(
    port: &dyn MarketDataPort,
    ordered: &[Transaction],
    range: &DateRange,
) -> HashMap<Ticker, Vec<DailyPrice>> {
    unique_symbols(ordered)
        .into_iter()
        .map(|symbol| {
            let mut prices = port.historical_prices(&symbol, range).unwrap_or_default();
            prices.sort_by_key(|p| p.date);
            (symbol, prices)
        })
        .collect()
}

/// Latest known close per traded symbol; zero when no price exists, so that
/// open positions still produce a mark-to-market sample.
fn latest_prices(
    port: &dyn MarketDataPort,
    ordered: &[Transaction],
    range: &DateRange,
) -> HashMap<Ticker, Decimal> {
    fetch_portfolio_prices(port, ordered, range)
        .into_iter()
        .map(|(symbol, prices)| {
            let latest = prices
                .iter()
                .max_by_key(|p| p.date)
                .map_or(Decimal::ZERO, |p| p.close);
            (symbol, latest)
        })
        .collect()
}
