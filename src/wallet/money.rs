use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),
}

/// An amount of money in minor units (cents, dirams, ...)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds `other` in place. On overflow the value is left untouched.
    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        let sum = self.0.checked_add(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Overflow("add", *self, *other)
            } else {
                MoneyError::Underflow("add", *self, *other)
            }
        })?;

        self.0 = sum;

        return Ok(());
    }

    /// Subtracts `other` in place. On overflow the value is left untouched.
    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        let diff = self.0.checked_sub(other.0).ok_or_else(|| {
            if other.0 > 0 {
                MoneyError::Underflow("sub", *self, *other)
            } else {
                MoneyError::Overflow("sub", *self, *other)
            }
        })?;

        self.0 = diff;

        return Ok(());
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add() {
        let mut money = Money(10_000_00);
        money.add(&Money(1_000_00)).unwrap();
        assert_eq!(money, Money(11_000_00));

        money.add(&Money(-11_000_00)).unwrap();
        assert_eq!(money, Money::ZERO);
    }

    #[test]
    fn add_overflow_leaves_value_untouched() {
        let mut money = Money(Money::MAX.0 - 1);

        let err = money.add(&Money(2)).unwrap_err();

        assert_eq!(
            err,
            MoneyError::Overflow("add", Money(Money::MAX.0 - 1), Money(2))
        );
        assert_eq!(money, Money(Money::MAX.0 - 1));

        let mut money = Money::MIN;
        let err = money.add(&Money(-1)).unwrap_err();
        assert!(matches!(err, MoneyError::Underflow("add", _, _)));
        assert_eq!(money, Money::MIN);
    }

    #[test]
    fn sub() {
        let mut money = Money(10_000_00);
        money.sub(&Money(1_000_00)).unwrap();
        assert_eq!(money, Money(9_000_00));

        let mut money = Money::MIN;
        let err = money.sub(&Money(1)).unwrap_err();
        assert!(matches!(err, MoneyError::Underflow("sub", _, _)));
        assert_eq!(money, Money::MIN);
    }

    #[test]
    fn is_positive() {
        assert!(Money(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money(-1).is_positive());
    }

    #[test]
    fn display() {
        assert_eq!(Money(100_000).to_string(), "100000");
        assert_eq!(Money(-5).to_string(), "-5");
    }
}
