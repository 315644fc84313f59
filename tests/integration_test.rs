//! End-to-end analysis tests through a mock market data port.

mod common;

use common::*;
use folioscope::domain::analysis::{
    AnalysisReport, do_nothing_simulation, market_weather, persona_analysis, stock_indicators,
};
use folioscope::domain::date_range::DateRange;
use folioscope::domain::mood::{MoodScore, Trend, WeatherType};
use folioscope::domain::persona::PersonaId;
use folioscope::domain::transaction::Ticker;
use folioscope::ports::report_port::ReportPort;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn spy() -> Ticker {
    Ticker::new("SPY").unwrap()
}

mod weather {
    use super::*;

    #[test]
    fn calm_market_with_strong_momentum_is_sunny() {
        // Climbing closes keep the RSI high while the VIX sits at the floor.
        let port = MockMarketDataPort::new()
            .with_vix(dec!(10))
            .with_prices("SPY", climbing_series("SPY", date(2024, 1, 1), 60));

        let report = market_weather(&port, &spy(), None, date(2024, 3, 1));

        // VIX term contributes its full 60 points; the RSI of a pure
        // uptrend is 100, adding the full 40.
        assert_eq!(report.mood_score, 100);
        assert_eq!(report.weather, WeatherType::Sunny);
    }

    #[test]
    fn panicked_market_is_stormy() {
        let falling: Vec<_> = (0..60i64)
            .map(|i| {
                let mut bar = make_price("SPY", "2024-01-01", dec!(500) - Decimal::from(i));
                bar.date = date(2024, 1, 1) + chrono::Duration::days(i);
                bar
            })
            .collect();
        let port = MockMarketDataPort::new()
            .with_vix(dec!(80))
            .with_prices("SPY", falling);

        let report = market_weather(&port, &spy(), None, date(2024, 3, 1));
        assert_eq!(report.mood_score, 0);
        assert_eq!(report.weather, WeatherType::Stormy);
    }

    #[test]
    fn trend_compares_against_previous_score() {
        let port = MockMarketDataPort::new().with_vix(dec!(20));
        // No prices: RSI degrades to 50, score 71.
        let report = market_weather(&port, &spy(), Some(MoodScore::clamped(60)), date(2024, 3, 1));
        assert_eq!(report.trend, Trend::Up);

        let report = market_weather(&port, &spy(), Some(MoodScore::clamped(70)), date(2024, 3, 1));
        assert_eq!(report.trend, Trend::Neutral);
    }
}

mod persona {
    use super::*;

    #[test]
    fn long_holder_with_low_turnover_is_hodler() {
        let transactions = vec![buy("2022-01-03", "AAPL", dec!(10), dec!(100))];
        let port = MockMarketDataPort::new()
            .with_prices("AAPL", vec![make_price("AAPL", "2024-01-02", dec!(180))]);

        let report = persona_analysis(&port, &transactions, date(2024, 1, 15));

        assert_eq!(report.persona_id, PersonaId::Hodler);
        assert!(report.stats.avg_holding_days > dec!(365));
        assert!(report.stats.turnover_rate < dec!(20));
    }

    #[test]
    fn rapid_churn_is_day_trader() {
        // Same-week round trips at huge volume relative to the span.
        let transactions = vec![
            buy("2024-01-02", "TSLA", dec!(100), dec!(200)),
            sell("2024-01-03", "TSLA", dec!(100), dec!(205)),
            buy("2024-01-04", "TSLA", dec!(100), dec!(202)),
            sell("2024-01-05", "TSLA", dec!(100), dec!(208)),
            buy("2024-01-08", "TSLA", dec!(100), dec!(204)),
            sell("2024-01-09", "TSLA", dec!(100), dec!(210)),
        ];
        let port = MockMarketDataPort::new();

        let report = persona_analysis(&port, &transactions, date(2024, 1, 10));

        assert_eq!(report.persona_id, PersonaId::DayTrader);
        assert!(report.stats.avg_holding_days < dec!(3));
    }

    #[test]
    fn selling_into_fear_is_panic_seller() {
        let transactions = vec![
            buy("2024-01-02", "NVDA", dec!(10), dec!(500)),
            sell("2024-02-01", "NVDA", dec!(5), dec!(450)),
            sell("2024-03-01", "NVDA", dec!(5), dec!(430)),
        ];
        let port = MockMarketDataPort::new().with_market_data(vec![
            make_market_row("2024-02-01", dec!(32), dec!(480)),
            make_market_row("2024-03-01", dec!(28), dec!(470)),
        ]);

        let report = persona_analysis(&port, &transactions, date(2024, 3, 15));

        assert_eq!(report.persona_id, PersonaId::PanicSeller);
        assert_eq!(report.stats.panic_sell_ratio, dec!(100.0));
    }

    #[test]
    fn empty_history_defaults_to_hodler_with_zero_stats() {
        let report = persona_analysis(&MockMarketDataPort::new(), &[], date(2024, 1, 1));
        assert_eq!(report.persona_id, PersonaId::Hodler);
        assert_eq!(report.stats.win_rate, Decimal::ZERO);
    }

    #[test]
    fn stats_are_rounded_for_display() {
        let transactions = vec![
            buy("2024-01-02", "AAPL", dec!(3), dec!(100)),
            sell("2024-01-09", "AAPL", dec!(3), dec!(110)),
        ];
        let report = persona_analysis(&MockMarketDataPort::new(), &transactions, date(2024, 2, 1));

        // One decimal place on every stat.
        assert_eq!(report.stats.avg_holding_days, dec!(7.0));
        assert_eq!(report.stats.win_rate, dec!(100.0));
    }
}

mod simulation {
    use super::*;

    #[test]
    fn frequent_trading_that_lags_benchmark_shows_drag() {
        // Buy 10 @ 100 (1000 in), worth 1050 now: +5%.
        // Benchmark went 400 -> 480 over the span: +20%.
        let transactions = vec![buy("2024-01-02", "AAPL", dec!(10), dec!(100))];
        let port = MockMarketDataPort::new()
            .with_prices(
                "AAPL",
                vec![
                    make_price("AAPL", "2024-01-02", dec!(100)),
                    make_price("AAPL", "2024-06-03", dec!(105)),
                ],
            )
            .with_prices(
                "SPY",
                vec![
                    make_price("SPY", "2024-01-02", dec!(400)),
                    make_price("SPY", "2024-06-03", dec!(480)),
                ],
            );

        let report = do_nothing_simulation(&port, &transactions, &spy(), date(2024, 6, 10));

        assert_eq!(report.actual_return_pct, dec!(5.00));
        assert_eq!(report.do_nothing_return_pct, dec!(20.00));
        assert_eq!(report.performance_drag, dec!(-15.00));
        assert!(report.verdict.contains("underperformed"));
    }

    #[test]
    fn chart_tracks_both_value_series() {
        let transactions = vec![buy("2024-01-02", "AAPL", dec!(10), dec!(100))];
        let port = MockMarketDataPort::new()
            .with_prices(
                "AAPL",
                vec![
                    make_price("AAPL", "2024-01-02", dec!(100)),
                    make_price("AAPL", "2024-01-03", dec!(102)),
                ],
            )
            .with_prices(
                "SPY",
                vec![
                    make_price("SPY", "2024-01-02", dec!(400)),
                    make_price("SPY", "2024-01-03", dec!(404)),
                ],
            );

        let report = do_nothing_simulation(&port, &transactions, &spy(), date(2024, 1, 5));

        assert_eq!(report.chart.len(), 2);
        assert_eq!(report.chart[0].actual_value, dec!(1000.00));
        assert_eq!(report.chart[0].do_nothing_value, dec!(1000.00));
        assert_eq!(report.chart[1].actual_value, dec!(1020.00));
        // 2.5 shares of the benchmark at 404.
        assert_eq!(report.chart[1].do_nothing_value, dec!(1010.00));
    }

    #[test]
    fn missing_benchmark_data_degrades_gracefully() {
        let transactions = vec![buy("2024-01-02", "AAPL", dec!(10), dec!(100))];
        let port = MockMarketDataPort::new()
            .with_prices("AAPL", vec![make_price("AAPL", "2024-01-02", dec!(100))])
            .with_error("SPY", "provider down");

        let report = do_nothing_simulation(&port, &transactions, &spy(), date(2024, 6, 10));

        assert_eq!(report.do_nothing_return_pct, Decimal::ZERO);
        assert!(report.chart.is_empty());
    }
}

mod indicators {
    use super::*;

    #[test]
    fn full_history_yields_all_indicators() {
        let port = MockMarketDataPort::new()
            .with_prices("AAPL", climbing_series("AAPL", date(2024, 1, 1), 40));
        let range = DateRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();

        let report = stock_indicators(&port, &Ticker::new("AAPL").unwrap(), &range);
        let set = report.indicators.expect("35 closes should be enough");

        // Monotonic climb pins the RSI at 100 and keeps the MACD positive.
        assert_eq!(set.rsi, Some(dec!(100.00)));
        let macd = set.macd.unwrap();
        assert!(macd.macd_line > Decimal::ZERO);
        let bands = set.bollinger_bands.unwrap();
        assert!(bands.upper > bands.middle);
        assert!(bands.middle > bands.lower);
    }

    #[test]
    fn short_history_yields_none() {
        let port = MockMarketDataPort::new()
            .with_prices("AAPL", climbing_series("AAPL", date(2024, 1, 1), 20));
        let range = DateRange::new(date(2024, 1, 1), date(2024, 3, 1)).unwrap();

        let report = stock_indicators(&port, &Ticker::new("AAPL").unwrap(), &range);
        assert!(report.indicators.is_none());
    }
}

mod rendering {
    use super::*;
    use folioscope::adapters::json_report::JsonReportAdapter;
    use folioscope::adapters::text_report::TextReportAdapter;

    #[test]
    fn weather_renders_in_both_formats() {
        let port = MockMarketDataPort::new().with_vix(dec!(20));
        let report = AnalysisReport::Weather(market_weather(&port, &spy(), None, date(2024, 3, 1)));

        let text = TextReportAdapter::new().render(&report).unwrap();
        assert!(text.contains("Mood score: 71/100"));

        let json = JsonReportAdapter::new().render(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["mood_score"], 71);
    }

    #[test]
    fn persona_json_includes_stats_and_advice() {
        let transactions = vec![buy("2022-01-03", "AAPL", dec!(10), dec!(100))];
        let report = AnalysisReport::Persona(persona_analysis(
            &MockMarketDataPort::new(),
            &transactions,
            date(2024, 1, 15),
        ));

        let json = JsonReportAdapter::new().render(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["persona_id"], "HODLER");
        assert!(parsed["stats"]["avg_holding_days"].is_string());
        assert!(parsed["advice"].as_str().unwrap().len() > 10);
    }
}
