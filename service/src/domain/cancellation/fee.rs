//! Cancellation fee [`Schedule`].

use common::{Money, Percent};
use rust_decimal::Decimal;

/// Tiered schedule of cancellation fees depending on how many days are left
/// before the tour starts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Schedule {
    /// [`Tier`]s ordered from the furthest departure to the nearest one.
    tiers: Vec<Tier>,

    /// Fee applied when no [`Tier`] matches.
    fallback: Percent,
}

/// Single row of a fee [`Schedule`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tier {
    /// Minimal number of days before departure this [`Tier`] applies to
    /// (inclusive).
    pub min_days_before: i64,

    /// Fee of this [`Tier`].
    pub fee: Percent,
}

/// Fee and refund a paid amount is split into on cancellation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Charges {
    /// Withheld part.
    pub fee: Money,

    /// Returned part.
    pub refund: Money,
}

impl Schedule {
    /// Creates a new [`Schedule`] out of the provided [`Tier`]s and the
    /// `fallback` fee.
    ///
    /// [`Tier`]s may be given in any order.
    #[must_use]
    pub fn new(mut tiers: Vec<Tier>, fallback: Percent) -> Self {
        tiers.sort_by(|a, b| b.min_days_before.cmp(&a.min_days_before));
        Self { tiers, fallback }
    }

    /// Returns the [`Tier`]s of this [`Schedule`], furthest first.
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Returns the fallback fee of this [`Schedule`].
    #[must_use]
    pub fn fallback(&self) -> Percent {
        self.fallback
    }

    /// Returns the fee [`Percent`] for a cancellation made `days_before` the
    /// departure.
    ///
    /// Negative `days_before` means the tour has already started.
    #[must_use]
    pub fn fee_percent(&self, days_before: i64) -> Percent {
        self.tiers
            .iter()
            .find(|t| days_before >= t.min_days_before)
            .map_or(self.fallback, |t| t.fee)
    }

    /// Splits the `paid` amount into [`Charges`] for a cancellation made
    /// `days_before` the departure.
    #[must_use]
    pub fn charges(&self, days_before: i64, paid: Money) -> Charges {
        let fee = self.fee_percent(days_before).of(paid);
        Charges {
            fee,
            refund: paid - fee,
        }
    }
}

impl Default for Schedule {
    #[expect(unsafe_code, reason = "constants are within range")]
    fn default() -> Self {
        let pct = |v: u8| unsafe { Percent::new_unchecked(Decimal::from(v)) };
        Self::new(
            vec![
                Tier {
                    min_days_before: 30,
                    fee: pct(10),
                },
                Tier {
                    min_days_before: 15,
                    fee: pct(25),
                },
                Tier {
                    min_days_before: 7,
                    fee: pct(50),
                },
            ],
            pct(75),
        )
    }
}

#[cfg(test)]
mod spec {
    use common::{Money, Percent};

    use super::{Schedule, Tier};

    fn pct(v: u8) -> Percent {
        Percent::new(v).unwrap()
    }

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn default_tiers() {
        let s = Schedule::default();

        for (days, fee) in [
            (365, 10),
            (30, 10),
            (29, 25),
            (15, 25),
            (14, 50),
            (7, 50),
            (6, 75),
            (0, 75),
            (-3, 75),
        ] {
            assert_eq!(s.fee_percent(days), pct(fee), "{days} days before");
        }
    }

    #[test]
    fn orders_tiers_on_creation() {
        let s = Schedule::new(
            vec![
                Tier {
                    min_days_before: 1,
                    fee: pct(90),
                },
                Tier {
                    min_days_before: 10,
                    fee: pct(0),
                },
            ],
            pct(100),
        );

        assert_eq!(s.tiers()[0].min_days_before, 10);
        assert_eq!(s.fee_percent(12), pct(0));
        assert_eq!(s.fee_percent(5), pct(90));
        assert_eq!(s.fee_percent(0), pct(100));
        assert_eq!(s.fallback(), pct(100));
    }

    #[test]
    fn splits_paid_amount() {
        let s = Schedule::default();

        let c = s.charges(10, money("200"));
        assert_eq!(c.fee, money("100"));
        assert_eq!(c.refund, money("100"));

        let c = s.charges(20, money("33.33"));
        assert_eq!(c.fee + c.refund, money("33.33"));

        let c = s.charges(40, Money::ZERO);
        assert_eq!(c.fee, Money::ZERO);
        assert_eq!(c.refund, Money::ZERO);
    }
}
