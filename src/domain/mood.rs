//! Market mood scoring and weather classification.
//!
//! The score blends inverted normalized VIX (60%) with normalized RSI (40%)
//! into a 0-100 integer. Weather buckets, trend direction, and the display
//! factor tags all hang off that scalar but never feed back into it.

use crate::domain::error::FolioscopeError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

const VIX_MIN: Decimal = dec!(10);
const VIX_MAX: Decimal = dec!(80);
const VIX_WEIGHT: Decimal = dec!(0.6);
const RSI_WEIGHT: Decimal = dec!(0.4);

/// Integer mood score in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MoodScore(i32);

impl MoodScore {
    /// Strict constructor: out-of-range values are rejected.
    pub fn new(value: i32) -> Result<Self, FolioscopeError> {
        if !(0..=100).contains(&value) {
            return Err(FolioscopeError::InvalidMoodScore { value });
        }
        Ok(Self(value))
    }

    /// Clamping constructor for calculator output.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, 100))
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherType {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl fmt::Display for WeatherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherType::Sunny => "SUNNY",
            WeatherType::Cloudy => "CLOUDY",
            WeatherType::Rainy => "RAINY",
            WeatherType::Stormy => "STORMY",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Neutral => "NEUTRAL",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FactorImpact {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for FactorImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactorImpact::Positive => "POSITIVE",
            FactorImpact::Negative => "NEGATIVE",
            FactorImpact::Neutral => "NEUTRAL",
        };
        f.write_str(name)
    }
}

/// Display-only tag for one mood input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketFactor {
    pub name: &'static str,
    pub value: Decimal,
    pub impact: FactorImpact,
}

/// Composite mood score from the current VIX level and benchmark RSI.
/// Low volatility contributes positively (the VIX term is inverted).
pub fn mood_score(vix: Decimal, rsi: Decimal) -> MoodScore {
    let norm_vix = (vix.clamp(VIX_MIN, VIX_MAX) - VIX_MIN) / (VIX_MAX - VIX_MIN);
    let norm_rsi = rsi.clamp(Decimal::ZERO, dec!(100)) / dec!(100);

    let score = ((Decimal::ONE - norm_vix) * VIX_WEIGHT + norm_rsi * RSI_WEIGHT) * dec!(100);
    let rounded = score.clamp(Decimal::ZERO, dec!(100)).round();

    MoodScore::clamped(rounded.to_i32().unwrap_or(0))
}

/// Non-overlapping buckets, evaluated high to low.
pub fn classify_weather(score: MoodScore) -> WeatherType {
    match score.value() {
        80.. => WeatherType::Sunny,
        50.. => WeatherType::Cloudy,
        30.. => WeatherType::Rainy,
        _ => WeatherType::Stormy,
    }
}

const TREND_NEUTRAL_BAND: i32 = 3;

/// Direction versus the previous score; Neutral without one, and within
/// the +/-3 band (inclusive).
pub fn analyze_trend(current: MoodScore, previous: Option<MoodScore>) -> Trend {
    let Some(previous) = previous else {
        return Trend::Neutral;
    };

    let difference = current.value() - previous.value();
    if difference > TREND_NEUTRAL_BAND {
        Trend::Up
    } else if difference < -TREND_NEUTRAL_BAND {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

/// Impact tags for the two mood inputs. Display metadata only.
pub fn market_factors(vix: Decimal, rsi: Decimal) -> Vec<MarketFactor> {
    let vix_impact = if vix < dec!(20) {
        FactorImpact::Positive
    } else if vix > dec!(30) {
        FactorImpact::Negative
    } else {
        FactorImpact::Neutral
    };

    let rsi_impact = if rsi > dec!(70) {
        FactorImpact::Negative
    } else if rsi < dec!(30) {
        FactorImpact::Positive
    } else {
        FactorImpact::Neutral
    };

    vec![
        MarketFactor {
            name: "VIX",
            value: vix,
            impact: vix_impact,
        },
        MarketFactor {
            name: "RSI",
            value: rsi,
            impact: rsi_impact,
        },
    ]
}
