//! Fixed-point currency amounts used by the checkout order summary.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::MoneyError;

/// A non-negative amount in whole cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    /// Accepts `"10.99"`, `"$329.98"`, `"$9.9"` and `"12"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || MoneyError::Invalid(raw.to_string());
        let body = raw.trim();
        let body = body.strip_prefix('$').unwrap_or(body);

        let (whole, frac) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };
        if whole.is_empty() || frac.len() > 2 {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u64 = whole.parse().map_err(|_| invalid())?;
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_and_bare_amounts() {
        assert_eq!("$329.98".parse::<Money>().unwrap(), Money::from_cents(32_998));
        assert_eq!("10.99".parse::<Money>().unwrap(), Money::from_cents(1_099));
        assert_eq!("$9.9".parse::<Money>().unwrap(), Money::from_cents(990));
        assert_eq!("12".parse::<Money>().unwrap(), Money::from_cents(1_200));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "$", "abc", "1.234", "-3.00", "$1,000.00", ".50"] {
            assert!(raw.parse::<Money>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Money::from_cents(36_637).to_string(), "$366.37");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn sums_line_items() {
        let total: Money = [32_998, 999, 2_640].into_iter().map(Money::from_cents).sum();
        assert_eq!(total, Money::from_cents(36_637));
    }
}
