//! Trader persona classification.
//!
//! A fixed-priority decision table over the four trading statistics; first
//! match wins. Display metadata is a constant lookup, not derived.

use crate::domain::analytics::TradingStats;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonaId {
    Hodler,
    DayTrader,
    PanicSeller,
    Sniper,
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PersonaId::Hodler => "HODLER",
            PersonaId::DayTrader => "DAYTRADER",
            PersonaId::PanicSeller => "PANICSELLER",
            PersonaId::Sniper => "SNIPER",
        };
        f.write_str(name)
    }
}

/// Static display metadata for a persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonaInfo {
    pub display_name: &'static str,
    pub traits: &'static [&'static str],
    pub description: &'static str,
    pub advice: &'static str,
}

static HODLER: PersonaInfo = PersonaInfo {
    display_name: "The HODLer",
    traits: &["Patient investor", "Long-term focus", "Low trading activity"],
    description: "You're a patient investor who believes in the power of time in the market. \
                  You rarely trade and prefer to let your investments grow over years.",
    advice: "Your patient approach often beats active trading. Continue to focus on quality \
             investments and resist the urge to check prices daily.",
};

static DAY_TRADER: PersonaInfo = PersonaInfo {
    display_name: "The Day Trader",
    traits: &[
        "High frequency trading",
        "Short holding periods",
        "Active market participant",
    ],
    description: "You trade frequently with short holding periods. You're always looking for \
                  the next opportunity and aren't afraid to act quickly.",
    advice: "Consider the impact of transaction costs on your returns. Even small fees add up \
             with high-frequency trading. Try extending some holding periods.",
};

static PANIC_SELLER: PersonaInfo = PersonaInfo {
    display_name: "The Panic Seller",
    traits: &[
        "Emotional trading",
        "Sells during volatility",
        "Fear-driven decisions",
    ],
    description: "You tend to sell when markets get scary. High VIX days trigger your sell \
                  button, often at the worst possible times.",
    advice: "Market volatility is normal. Consider setting rules for yourself: don't trade on \
             high-VIX days, or use limit orders instead of market orders during volatility.",
};

static SNIPER: PersonaInfo = PersonaInfo {
    display_name: "The Sniper",
    traits: &["Selective trader", "High win rate", "Quality over quantity"],
    description: "You don't trade often, but when you do, you usually win. You're patient and \
                  wait for the right opportunities.",
    advice: "Your selective approach is working well. Keep trusting your analysis and don't \
             feel pressured to trade more frequently.",
};

impl PersonaId {
    pub fn info(self) -> &'static PersonaInfo {
        match self {
            PersonaId::Hodler => &HODLER,
            PersonaId::DayTrader => &DAY_TRADER,
            PersonaId::PanicSeller => &PANIC_SELLER,
            PersonaId::Sniper => &SNIPER,
        }
    }
}

pub fn classify(stats: &TradingStats) -> PersonaId {
    if stats.avg_holding_days > dec!(365) && stats.turnover_rate < dec!(20) {
        return PersonaId::Hodler;
    }

    if stats.avg_holding_days < dec!(3) && stats.turnover_rate > dec!(500) {
        return PersonaId::DayTrader;
    }

    if stats.panic_sell_ratio > dec!(60) {
        return PersonaId::PanicSeller;
    }

    if stats.turnover_rate < dec!(100) && stats.win_rate > dec!(70) {
        return PersonaId::Sniper;
    }

    if stats.turnover_rate > dec!(200) {
        PersonaId::DayTrader
    } else {
        PersonaId::Hodler
    }
}
