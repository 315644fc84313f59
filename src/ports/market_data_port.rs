//! Market data access port trait.
//!
//! Implementations fetch price bars and macro snapshots from wherever they
//! live (files, caches, remote providers). The core never fetches anything
//! itself; orchestration degrades fetch failures to neutral defaults.

use crate::domain::date_range::DateRange;
use crate::domain::error::FolioscopeError;
use crate::domain::price::{DailyMarketData, DailyPrice};
use crate::domain::transaction::Ticker;
use rust_decimal::Decimal;

pub trait MarketDataPort {
    /// Daily bars for one symbol within the range, in chronological order.
    fn historical_prices(
        &self,
        symbol: &Ticker,
        range: &DateRange,
    ) -> Result<Vec<DailyPrice>, FolioscopeError>;

    /// Macro snapshots (VIX and benchmark close) within the range.
    fn market_data(&self, range: &DateRange)
    -> Result<Vec<DailyMarketData>, FolioscopeError>;

    /// The most recent VIX level.
    fn current_vix(&self) -> Result<Decimal, FolioscopeError>;
}
