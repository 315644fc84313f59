//! Domain error types.
//!
//! Construction failures (bad tickers, inverted date ranges, out-of-range
//! scores) and adapter I/O are the only error channels. "Not enough history"
//! is never an error; calculators return `None` for that.

use chrono::NaiveDate;

/// Top-level error type for folioscope.
#[derive(Debug, thiserror::Error)]
pub enum FolioscopeError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("mood score must be between 0 and 100, got {value}")]
    InvalidMoodScore { value: i32 },

    #[error("invalid ticker symbol: {reason}")]
    InvalidTicker { reason: String },

    #[error("invalid transaction: {reason}")]
    InvalidTransaction { reason: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FolioscopeError> for std::process::ExitCode {
    fn from(err: &FolioscopeError) -> Self {
        let code: u8 = match err {
            FolioscopeError::Io(_) => 1,
            FolioscopeError::ConfigParse { .. }
            | FolioscopeError::ConfigMissing { .. }
            | FolioscopeError::ConfigInvalid { .. } => 2,
            FolioscopeError::Data { .. } => 3,
            FolioscopeError::InvalidDateRange { .. }
            | FolioscopeError::InvalidMoodScore { .. }
            | FolioscopeError::InvalidTicker { .. }
            | FolioscopeError::InvalidTransaction { .. } => 4,
            FolioscopeError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
