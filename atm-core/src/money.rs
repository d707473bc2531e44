use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AtmError;

/// An exact decimal amount of currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn inner(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Parse text typed into an amount field.
    ///
    /// Surrounding whitespace is ignored and blank input reads as zero, the
    /// same way a numeric form field coerces an empty value. Both plain
    /// decimals (`12.50`) and scientific notation (`1e3`) are accepted.
    pub fn parse(raw: &str) -> Result<Self, AtmError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::ZERO);
        }

        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map(Self)
            .map_err(|_| AtmError::InvalidAmount(raw.to_string()))
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Two decimal places, or every significant digit when there are more
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let normalized = self.0.normalize();
        if normalized.scale() > 2 {
            write!(f, "{}", normalized)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(Money::parse("12.5"), Ok(Money::new(dec!(12.5))));
        assert_eq!(Money::parse("  50 "), Ok(Money::from(50)));
        assert_eq!(Money::parse("-3"), Ok(Money::from(-3)));
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(Money::parse(""), Ok(Money::ZERO));
        assert_eq!(Money::parse("   "), Ok(Money::ZERO));
    }

    #[test]
    fn test_parse_scientific() {
        assert_eq!(Money::parse("1e3"), Ok(Money::from(1000)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::parse("abc"),
            Err(AtmError::InvalidAmount(_))
        ));
        assert!(matches!(
            Money::parse("1.2.3"),
            Err(AtmError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Money::from(50).to_string(), "50.00");
        assert_eq!(Money::new(dec!(0.5)).to_string(), "0.50");
        assert_eq!(Money::new(dec!(12.500)).to_string(), "12.50");
    }

    #[test]
    fn test_display_keeps_extra_precision() {
        assert_eq!(Money::new(dec!(0.001)).to_string(), "0.001");
        assert_eq!(Money::new(dec!(20.1250)).to_string(), "20.125");
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from(10);
        let b = Money::new(dec!(2.25));
        assert_eq!(a.checked_add(b), Some(Money::new(dec!(12.25))));
        assert_eq!(a.checked_sub(b), Some(Money::new(dec!(7.75))));
        assert_eq!(Money::new(Decimal::MAX).checked_add(a), None);
    }
}
