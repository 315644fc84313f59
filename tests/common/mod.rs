#![allow(dead_code)]

use chrono::NaiveDate;
use folioscope::domain::date_range::DateRange;
use folioscope::domain::error::FolioscopeError;
use folioscope::domain::price::{DailyMarketData, DailyPrice};
use folioscope::domain::transaction::{Ticker, TradeAction, Transaction};
use folioscope::ports::market_data_port::MarketDataPort;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

pub struct MockMarketDataPort {
    pub prices: HashMap<String, Vec<DailyPrice>>,
    pub market_data: Vec<DailyMarketData>,
    pub vix: Option<Decimal>,
    pub errors: HashMap<String, String>,
}

impl MockMarketDataPort {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            market_data: Vec::new(),
            vix: None,
            errors: HashMap::new(),
        }
    }

    pub fn with_prices(mut self, symbol: &str, prices: Vec<DailyPrice>) -> Self {
        self.prices.insert(symbol.to_string(), prices);
        self
    }

    pub fn with_market_data(mut self, rows: Vec<DailyMarketData>) -> Self {
        self.market_data = rows;
        self
    }

    pub fn with_vix(mut self, vix: Decimal) -> Self {
        self.vix = Some(vix);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl MarketDataPort for MockMarketDataPort {
    fn historical_prices(
        &self,
        symbol: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<DailyPrice>, FolioscopeError> {
        if let Some(reason) = self.errors.get(symbol.as_str()) {
            return Err(FolioscopeError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .prices
            .get(symbol.as_str())
            .map(|prices| {
                prices
                    .iter()
                    .filter(|p| range.contains(p.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn market_data(&self, range: &DateRange) -> Result<Vec<DailyMarketData>, FolioscopeError> {
        Ok(self
            .market_data
            .iter()
            .filter(|r| range.contains(r.date))
            .cloned()
            .collect())
    }

    fn current_vix(&self) -> Result<Decimal, FolioscopeError> {
        self.vix.ok_or_else(|| FolioscopeError::Data {
            reason: "no vix".into(),
        })
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_price(symbol: &str, date_str: &str, close: Decimal) -> DailyPrice {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
    DailyPrice {
        date,
        symbol: Ticker::new(symbol).unwrap(),
        open: close,
        high: close + dec!(1),
        low: close - dec!(1),
        close,
        volume: 1_000,
    }
}

pub fn make_market_row(date_str: &str, vix: Decimal, spy_close: Decimal) -> DailyMarketData {
    DailyMarketData {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        vix,
        spy_close,
    }
}

pub fn buy(date_str: &str, symbol: &str, quantity: Decimal, price: Decimal) -> Transaction {
    transaction(date_str, symbol, TradeAction::Buy, quantity, price)
}

pub fn sell(date_str: &str, symbol: &str, quantity: Decimal, price: Decimal) -> Transaction {
    transaction(date_str, symbol, TradeAction::Sell, quantity, price)
}

fn transaction(
    date_str: &str,
    symbol: &str,
    action: TradeAction,
    quantity: Decimal,
    price: Decimal,
) -> Transaction {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap();
    Transaction::new(date, symbol, action, quantity, price).unwrap()
}

/// A slow daily climb long enough to satisfy every indicator window.
pub fn climbing_series(symbol: &str, start: NaiveDate, days: usize) -> Vec<DailyPrice> {
    (0..days)
        .map(|i| {
            let close = dec!(100) + Decimal::from(i as i64);
            DailyPrice {
                date: start + chrono::Duration::days(i as i64),
                symbol: Ticker::new(symbol).unwrap(),
                open: close,
                high: close + dec!(1),
                low: close - dec!(1),
                close,
                volume: 1_000,
            }
        })
        .collect()
}
