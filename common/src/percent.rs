//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

use crate::Money;

/// Percentage in the `0..=100` range.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value is within the
    /// `0..=100` range.
    #[must_use]
    pub fn new(val: impl Into<Decimal>) -> Option<Self> {
        let val = val.into();
        (Decimal::ZERO..=Decimal::ONE_HUNDRED)
            .contains(&val)
            .then_some(Self(val))
    }

    /// Creates a new [`Percent`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided value must be within the `0..=100` range.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(val: Decimal) -> Self {
        Self(val)
    }

    /// Returns the [`Decimal`] value of this [`Percent`].
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Calculates this [`Percent`] of the provided [`Money`].
    ///
    /// The division goes first, so the result cannot overflow.
    #[must_use]
    pub fn of(self, money: Money) -> Money {
        Money::from(money.amount() / Decimal::ONE_HUNDRED * self.0)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use crate::Money;

    use super::Percent;

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn bounds() {
        assert!(Percent::new(0_u8).is_some());
        assert!(Percent::new(100_u8).is_some());
        assert!(Percent::new(101_u8).is_none());
        assert!(Percent::new(Decimal::NEGATIVE_ONE).is_none());

        assert!(Percent::from_str("12.5").is_ok());
        assert!(Percent::from_str("100.01").is_err());
        assert!(Percent::from_str("ten").is_err());
    }

    #[test]
    fn of_money() {
        let half = Percent::new(50_u8).unwrap();
        assert_eq!(half.of(money("200")), money("100"));

        let quarter = Percent::new(25_u8).unwrap();
        assert_eq!(quarter.of(money("33.33")), money("8.3325"));

        let none = Percent::new(0_u8).unwrap();
        assert_eq!(none.of(money("200")), Money::ZERO);

        let all = Percent::new(100_u8).unwrap();
        assert_eq!(all.of(money("19.99")), money("19.99"));
    }
}
