//! CSV file market data adapter.
//!
//! Reads daily bars from `<SYMBOL>.csv` (date,open,high,low,close,volume)
//! and macro snapshots from `market_data.csv` (date,vix,spy_close), all
//! relative to a base directory. Also loads transaction histories from a
//! standalone CSV (date,symbol,action,quantity,price).

use crate::domain::date_range::DateRange;
use crate::domain::error::FolioscopeError;
use crate::domain::price::{DailyMarketData, DailyPrice};
use crate::domain::transaction::{Ticker, TradeAction, Transaction, sorted_by_date};
use crate::ports::market_data_port::MarketDataPort;
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

const MARKET_DATA_FILE: &str = "market_data.csv";

pub struct CsvMarketDataAdapter {
    base_path: PathBuf,
}

impl CsvMarketDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn prices_path(&self, symbol: &Ticker) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol.as_str()))
    }

    fn read_file(path: &Path) -> Result<String, FolioscopeError> {
        fs::read_to_string(path).map_err(|e| FolioscopeError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, name: &str) -> Result<&'r str, FolioscopeError> {
    record.get(index).ok_or_else(|| FolioscopeError::Data {
        reason: format!("missing {} column", name),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, FolioscopeError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| FolioscopeError::Data {
        reason: format!("invalid date format: {}", e),
    })
}

fn parse_decimal(value: &str, name: &str) -> Result<Decimal, FolioscopeError> {
    value.trim().parse().map_err(|e| FolioscopeError::Data {
        reason: format!("invalid {} value: {}", name, e),
    })
}

impl MarketDataPort for CsvMarketDataAdapter {
    fn historical_prices(
        &self,
        symbol: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<DailyPrice>, FolioscopeError> {
        let path = self.prices_path(symbol);
        let content = Self::read_file(&path)?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut prices = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| FolioscopeError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date = parse_date(field(&record, 0, "date")?)?;
            if !range.contains(date) {
                continue;
            }

            prices.push(DailyPrice {
                date,
                symbol: symbol.clone(),
                open: parse_decimal(field(&record, 1, "open")?, "open")?,
                high: parse_decimal(field(&record, 2, "high")?, "high")?,
                low: parse_decimal(field(&record, 3, "low")?, "low")?,
                close: parse_decimal(field(&record, 4, "close")?, "close")?,
                volume: field(&record, 5, "volume")?.trim().parse().map_err(|e| {
                    FolioscopeError::Data {
                        reason: format!("invalid volume value: {}", e),
                    }
                })?,
            });
        }

        prices.sort_by_key(|p| p.date);
        Ok(prices)
    }

    fn market_data(&self, range: &DateRange) -> Result<Vec<DailyMarketData>, FolioscopeError> {
        let path = self.base_path.join(MARKET_DATA_FILE);
        let content = Self::read_file(&path)?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut rows = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| FolioscopeError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date = parse_date(field(&record, 0, "date")?)?;
            if !range.contains(date) {
                continue;
            }

            rows.push(DailyMarketData {
                date,
                vix: parse_decimal(field(&record, 1, "vix")?, "vix")?,
                spy_close: parse_decimal(field(&record, 2, "spy_close")?, "spy_close")?,
            });
        }

        rows.sort_by_key(|r| r.date);
        Ok(rows)
    }

    fn current_vix(&self) -> Result<Decimal, FolioscopeError> {
        let path = self.base_path.join(MARKET_DATA_FILE);
        let content = Self::read_file(&path)?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut latest: Option<(NaiveDate, Decimal)> = None;

        for result in rdr.records() {
            let record = result.map_err(|e| FolioscopeError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date = parse_date(field(&record, 0, "date")?)?;
            let vix = parse_decimal(field(&record, 1, "vix")?, "vix")?;

            if latest.is_none_or(|(d, _)| date > d) {
                latest = Some((date, vix));
            }
        }

        latest
            .map(|(_, vix)| vix)
            .ok_or_else(|| FolioscopeError::Data {
                reason: format!("{} has no rows", path.display()),
            })
    }
}

/// Load a transaction history CSV (date,symbol,action,quantity,price),
/// returned in chronological order.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>, FolioscopeError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FolioscopeError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut transactions = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| FolioscopeError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let date = parse_date(field(&record, 0, "date")?)?;
        let symbol = field(&record, 1, "symbol")?;
        let action = TradeAction::parse(field(&record, 2, "action")?)?;
        let quantity = parse_decimal(field(&record, 3, "quantity")?, "quantity")?;
        let price = parse_decimal(field(&record, 4, "price")?, "price")?;

        transactions.push(Transaction::new(date, symbol, action, quantity, price)?);
    }

    Ok(sorted_by_date(&transactions))
}
