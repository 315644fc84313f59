//! Concrete adapter implementations for ports.

pub mod csv_market_data;
pub mod file_config_adapter;
pub mod json_report;
pub mod text_report;
