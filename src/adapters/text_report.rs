//! Plain-text report adapter implementing ReportPort.

use crate::domain::analysis::{
    AnalysisReport, IndicatorReport, MarketWeatherReport, PersonaReport, SimulationReport,
};
use crate::domain::error::FolioscopeError;
use crate::ports::report_port::ReportPort;
use std::fmt::Write;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_weather(report: &MarketWeatherReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Market Weather");
    let _ = writeln!(out, "--------------");
    let _ = writeln!(out, "Mood score: {}/100", report.mood_score);
    let _ = writeln!(out, "Conditions: {}", report.weather);
    let _ = writeln!(out, "Trend:      {}", report.trend);
    for factor in &report.factors {
        let _ = writeln!(
            out,
            "  {:<18} {:>8}  [{}]",
            factor.name, factor.value, factor.impact
        );
    }
    out
}

fn render_persona(report: &PersonaReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trading Persona: {}", report.display_name);
    let _ = writeln!(out, "-----------------{}", "-".repeat(report.display_name.len()));
    let _ = writeln!(out, "{}", report.description);
    let _ = writeln!(out);
    for t in &report.traits {
        let _ = writeln!(out, "  * {}", t);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Avg holding period: {} days", report.stats.avg_holding_days);
    let _ = writeln!(out, "Annual turnover:    {}%", report.stats.turnover_rate);
    let _ = writeln!(out, "Panic-sell ratio:   {}%", report.stats.panic_sell_ratio);
    let _ = writeln!(out, "Win rate:           {}%", report.stats.win_rate);
    let _ = writeln!(out);
    let _ = writeln!(out, "Advice: {}", report.advice);
    out
}

fn render_simulation(report: &SimulationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Do-Nothing Simulation");
    let _ = writeln!(out, "---------------------");
    let _ = writeln!(out, "Actual return:     {}%", report.actual_return_pct);
    let _ = writeln!(out, "Do-nothing return: {}%", report.do_nothing_return_pct);
    let _ = writeln!(out, "Performance drag:  {}%", report.performance_drag);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.verdict);
    if !report.chart.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{:<12} {:>14} {:>14}", "Date", "Actual", "Do-nothing");
        for point in &report.chart {
            let _ = writeln!(
                out,
                "{:<12} {:>14} {:>14}",
                point.date, point.actual_value, point.do_nothing_value
            );
        }
    }
    out
}

fn render_indicators(report: &IndicatorReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Indicators for {}", report.symbol.as_str());
    let _ = writeln!(out, "---------------{}", "-".repeat(report.symbol.as_str().len()));
    match &report.indicators {
        Some(set) => {
            if let Some(rsi) = set.rsi {
                let _ = writeln!(out, "RSI(14):        {}", rsi);
            }
            if let Some(macd) = &set.macd {
                let _ = writeln!(out, "MACD line:      {}", macd.macd_line);
                let _ = writeln!(out, "Signal line:    {}", macd.signal_line);
                let _ = writeln!(out, "Histogram:      {}", macd.histogram);
            }
            if let Some(bands) = &set.bollinger_bands {
                let _ = writeln!(out, "Bollinger up:   {}", bands.upper);
                let _ = writeln!(out, "Bollinger mid:  {}", bands.middle);
                let _ = writeln!(out, "Bollinger low:  {}", bands.lower);
            }
        }
        None => {
            let _ = writeln!(out, "Not enough price history (need 35 closes).");
        }
    }
    out
}

impl ReportPort for TextReportAdapter {
    fn render(&self, report: &AnalysisReport) -> Result<String, FolioscopeError> {
        Ok(match report {
            AnalysisReport::Weather(r) => render_weather(r),
            AnalysisReport::Persona(r) => render_persona(r),
            AnalysisReport::Simulation(r) => render_simulation(r),
            AnalysisReport::Indicators(r) => render_indicators(r),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::TradingStats;
    use crate::domain::mood::{FactorImpact, MarketFactor, Trend, WeatherType};
    use crate::domain::persona::PersonaId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn renders_weather_report() {
        let report = AnalysisReport::Weather(MarketWeatherReport {
            mood_score: 71,
            weather: WeatherType::Cloudy,
            trend: Trend::Neutral,
            factors: vec![MarketFactor {
                name: "VIX",
                value: dec!(20),
                impact: FactorImpact::Neutral,
            }],
        });

        let text = TextReportAdapter::new().render(&report).unwrap();
        assert!(text.contains("71/100"));
        assert!(text.contains("CLOUDY"));
        assert!(text.contains("VIX"));
    }

    #[test]
    fn renders_persona_report() {
        let report = AnalysisReport::Persona(PersonaReport {
            persona_id: PersonaId::Hodler,
            display_name: "The Hodler",
            traits: vec!["Patient investor"],
            description: "desc",
            advice: "advice",
            stats: TradingStats {
                avg_holding_days: dec!(400.0),
                turnover_rate: dec!(15.0),
                panic_sell_ratio: dec!(0.0),
                win_rate: dec!(60.0),
            },
        });

        let text = TextReportAdapter::new().render(&report).unwrap();
        assert!(text.contains("The Hodler"));
        assert!(text.contains("400.0 days"));
        assert!(text.contains("Advice: advice"));
    }

    #[test]
    fn renders_simulation_without_chart() {
        let report = AnalysisReport::Simulation(SimulationReport {
            actual_return_pct: Decimal::ZERO,
            do_nothing_return_pct: Decimal::ZERO,
            performance_drag: Decimal::ZERO,
            verdict: "No transactions to analyze.".into(),
            chart: Vec::new(),
        });

        let text = TextReportAdapter::new().render(&report).unwrap();
        assert!(text.contains("No transactions to analyze."));
        assert!(!text.contains("Date"));
    }
}
