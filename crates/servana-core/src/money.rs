//! Structured money values.
//!
//! Prices are defined once, in minor units, when the catalog is declared.
//! Display strings are derived from them and never parsed back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes accepted by the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
        }
    }

    /// Number of minor units (paise, cents) in one major unit
    pub fn minor_per_major(&self) -> i64 {
        100
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in a currency's minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: Currency,
}

impl Money {
    pub const fn from_minor(minor_units: i64, currency: Currency) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Whole rupees, e.g. `Money::inr(50)` is ₹50 (5000 paise).
    pub const fn inr(rupees: i64) -> Self {
        Self::from_minor(rupees * 100, Currency::Inr)
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    /// `₹50` for whole amounts, `₹50.25` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_major = self.currency.minor_per_major();
        let sign = if self.minor_units < 0 { "-" } else { "" };
        let abs = self.minor_units.abs();
        let (major, minor) = (abs / per_major, abs % per_major);
        if minor == 0 {
            write!(f, "{sign}{}{major}", self.currency.symbol())
        } else {
            write!(f, "{sign}{}{major}.{minor:02}", self.currency.symbol())
        }
    }
}

/// Billing unit of a quoted rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateUnit {
    Hour,
    Visit,
}

impl RateUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            RateUnit::Hour => "/hr",
            RateUnit::Visit => "/visit",
        }
    }
}

/// A quoted price per unit, e.g. ₹50/hr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rate {
    pub money: Money,
    pub unit: RateUnit,
}

impl Rate {
    pub const fn hourly(money: Money) -> Self {
        Self {
            money,
            unit: RateUnit::Hour,
        }
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.money, self.unit.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_stores_paise() {
        let m = Money::inr(50);
        assert_eq!(m.minor_units(), 5000);
        assert_eq!(m.currency(), Currency::Inr);
    }

    #[test]
    fn test_money_display_whole_and_fractional() {
        assert_eq!(Money::inr(70).to_string(), "₹70");
        assert_eq!(Money::from_minor(4525, Currency::Inr).to_string(), "₹45.25");
        assert_eq!(Money::from_minor(1905, Currency::Usd).to_string(), "$19.05");
        assert_eq!(Money::from_minor(-150, Currency::Usd).to_string(), "-$1.50");
    }

    #[test]
    fn test_hourly_rate_display_matches_catalog_format() {
        assert_eq!(Rate::hourly(Money::inr(50)).to_string(), "₹50/hr");
    }

    #[test]
    fn test_currency_code_serializes_uppercase() {
        let json = serde_json::to_string(&Currency::Inr).unwrap();
        assert_eq!(json, "\"INR\"");
        assert_eq!(Currency::Inr.to_string(), "INR");
    }
}
