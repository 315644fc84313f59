//! Core domain types and logic.

pub mod analysis;
pub mod analytics;
pub mod benchmark;
pub mod date_range;
pub mod error;
pub mod indicator;
pub mod mood;
pub mod persona;
pub mod portfolio;
pub mod price;
pub mod transaction;
pub mod verdict;
