//! Trade transaction records and the ticker value object.
//!
//! A list of transactions is the unit of analysis. Inputs are never assumed
//! pre-sorted; every calculator re-orders by date itself.

use crate::domain::error::FolioscopeError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Normalized upper-case stock symbol, 1-10 characters of `[A-Z0-9.]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: &str) -> Result<Self, FolioscopeError> {
        let normalized = symbol.trim().to_ascii_uppercase();

        if normalized.is_empty() {
            return Err(FolioscopeError::InvalidTicker {
                reason: "symbol is required".into(),
            });
        }
        if normalized.len() > 10 {
            return Err(FolioscopeError::InvalidTicker {
                reason: format!("symbol {normalized:?} is longer than 10 characters"),
            });
        }
        if !normalized
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '.')
        {
            return Err(FolioscopeError::InvalidTicker {
                reason: format!("symbol {normalized:?} contains invalid characters"),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// Case-insensitive parse of "BUY"/"SELL".
    pub fn parse(input: &str) -> Result<Self, FolioscopeError> {
        match input.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(TradeAction::Buy),
            "SELL" => Ok(TradeAction::Sell),
            other => Err(FolioscopeError::InvalidTransaction {
                reason: format!("unknown action {other:?}, expected BUY or SELL"),
            }),
        }
    }
}

/// A single buy or sell, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub symbol: Ticker,
    pub action: TradeAction,
    pub quantity: Decimal,
    pub price: Decimal,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        symbol: &str,
        action: TradeAction,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<Self, FolioscopeError> {
        if quantity <= Decimal::ZERO {
            return Err(FolioscopeError::InvalidTransaction {
                reason: format!("quantity must be positive, got {quantity}"),
            });
        }
        if price <= Decimal::ZERO {
            return Err(FolioscopeError::InvalidTransaction {
                reason: format!("price must be positive, got {price}"),
            });
        }

        Ok(Self {
            date,
            symbol: Ticker::new(symbol)?,
            action,
            quantity,
            price,
        })
    }

    pub fn total_value(&self) -> Decimal {
        self.quantity * self.price
    }
}

/// Clone-and-sort by date. Stable, so same-day transactions keep input order.
pub fn sorted_by_date(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut ordered = transactions.to_vec();
    ordered.sort_by_key(|t| t.date);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ticker_normalizes_case_and_whitespace() {
        let ticker = Ticker::new("  aapl ").unwrap();
        assert_eq!(ticker.as_str(), "AAPL");
    }

    #[test]
    fn ticker_allows_digits_and_dots() {
        assert!(Ticker::new("BRK.B").is_ok());
        assert!(Ticker::new("360").is_ok());
    }

    #[test]
    fn ticker_rejects_empty() {
        assert!(Ticker::new("").is_err());
        assert!(Ticker::new("   ").is_err());
    }

    #[test]
    fn ticker_rejects_too_long() {
        assert!(Ticker::new("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn ticker_rejects_invalid_characters() {
        assert!(Ticker::new("AA PL").is_err());
        assert!(Ticker::new("AA-PL").is_err());
    }

    #[test]
    fn action_parse_case_insensitive() {
        assert_eq!(TradeAction::parse("buy").unwrap(), TradeAction::Buy);
        assert_eq!(TradeAction::parse("Sell").unwrap(), TradeAction::Sell);
        assert!(TradeAction::parse("hold").is_err());
    }

    #[test]
    fn transaction_total_value() {
        let txn = Transaction::new(
            date(2024, 1, 15),
            "AAPL",
            TradeAction::Buy,
            dec!(10),
            dec!(150.50),
        )
        .unwrap();
        assert_eq!(txn.total_value(), dec!(1505.00));
    }

    #[test]
    fn transaction_rejects_non_positive_quantity() {
        let result = Transaction::new(
            date(2024, 1, 15),
            "AAPL",
            TradeAction::Buy,
            dec!(0),
            dec!(150),
        );
        assert!(result.is_err());
    }

    #[test]
    fn transaction_rejects_non_positive_price() {
        let result = Transaction::new(
            date(2024, 1, 15),
            "AAPL",
            TradeAction::Sell,
            dec!(10),
            dec!(-1),
        );
        assert!(result.is_err());
    }

    #[test]
    fn sorted_by_date_orders_and_is_stable() {
        let a = Transaction::new(date(2024, 3, 1), "AAPL", TradeAction::Buy, dec!(1), dec!(10))
            .unwrap();
        let b = Transaction::new(date(2024, 1, 1), "MSFT", TradeAction::Buy, dec!(1), dec!(10))
            .unwrap();
        let c = Transaction::new(date(2024, 1, 1), "GOOG", TradeAction::Buy, dec!(1), dec!(10))
            .unwrap();

        let ordered = sorted_by_date(&[a.clone(), b.clone(), c.clone()]);
        assert_eq!(ordered[0].symbol, b.symbol);
        assert_eq!(ordered[1].symbol, c.symbol);
        assert_eq!(ordered[2].symbol, a.symbol);
    }
}
