//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Add, AddAssign, From, Into, Sub, Sum};
use rust_decimal::Decimal;

/// Amount of money in the single currency the agency operates in.
///
/// Backed by a [`Decimal`], so sums and differences are exact.
#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Sub,
    Sum,
)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Returns the [`Decimal`] amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] is strictly greater than zero.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Adds the provided `other` [`Money`] to this one.
    ///
    /// [`None`] is returned on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Multiplies this [`Money`] by the provided `factor`.
    ///
    /// [`None`] is returned on overflow.
    #[must_use]
    pub fn checked_mul(self, factor: impl Into<Decimal>) -> Option<Self> {
        self.0.checked_mul(factor.into()).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Money;

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45").unwrap(),
            Money::from(Decimal::new(12345, 2)),
        );
        assert_eq!(Money::from_str(" 200 ").unwrap(), money("200.00"));
        assert_eq!(Money::from_str("-5").unwrap(), money("-5.0"));

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("12USD").is_err());
        assert!(Money::from_str("1,5").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(money("123.45").to_string(), "123.45");
        assert_eq!(money("123").to_string(), "123.00");
        assert_eq!(money("0.5").to_string(), "0.50");
    }

    #[test]
    fn arithmetic_is_exact() {
        let mut paid = Money::ZERO;
        for _ in 0..3 {
            paid += money("0.1");
        }
        assert_eq!(paid, money("0.3"));

        assert_eq!(money("200") - money("50.25"), money("149.75"));
        assert_eq!(
            [money("1.10"), money("2.20")].into_iter().sum::<Money>(),
            money("3.30"),
        );
    }

    #[test]
    fn checked_add() {
        assert_eq!(
            money("100.50").checked_add(money("0.25")),
            Some(money("100.75")),
        );
        assert_eq!(
            Money::from(Decimal::MAX).checked_add(money("1")),
            None,
        );
    }

    #[test]
    fn checked_mul() {
        assert_eq!(money("100").checked_mul(2_u16), Some(money("200")));
        assert_eq!(money("19.99").checked_mul(3_u16), Some(money("59.97")));
        assert_eq!(Money::from(Decimal::MAX).checked_mul(2_u16), None);
    }

    #[test]
    fn positivity() {
        assert!(money("0.01").is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(!money("-1").is_positive());
    }
}
