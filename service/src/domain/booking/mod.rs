//! [`Booking`] definitions.

pub mod traveler;

use common::{define_kind, unit, DateOf, Money};
use derive_more::{Display, From, FromStr, Into};

use crate::domain::{customer, package, payment};
#[cfg(doc)]
use crate::domain::{Customer, Payment, TourPackage};

pub use self::traveler::Traveler;

/// Customer's reservation of seats in a [`TourPackage`].
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    pub id: Id,

    /// ID of the booked [`TourPackage`].
    pub package_id: package::Id,

    /// ID of the [`Customer`] who made this [`Booking`].
    pub customer_id: customer::Id,

    /// [`Date`] when this [`Booking`] was made.
    ///
    /// [`Date`]: common::Date
    pub booked_on: CreationDate,

    /// [`Traveler`]s of this [`Booking`], one per seat.
    travelers: Vec<Traveler>,

    /// Number of seats this [`Booking`] holds.
    num_seats: package::NumSeats,

    /// Current [`Status`] of this [`Booking`].
    status: Status,

    /// Amount to be paid for this [`Booking`].
    ///
    /// Fixed at creation from the [`TourPackage`] price.
    amount_due: Money,

    /// Total amount of [`Payment`]s recorded for this [`Booking`].
    paid_amount: Money,

    /// IDs of [`Payment`]s recorded for this [`Booking`], in recording
    /// order.
    payment_ids: Vec<payment::Id>,
}

impl Booking {
    /// Creates a new [`Status::Pending`] [`Booking`] with nothing paid yet.
    ///
    /// The caller must ensure that `num_seats` matches the number of
    /// `travelers` and `amount_due` is calculated from it.
    #[must_use]
    pub(crate) fn new(
        id: Id,
        package_id: package::Id,
        customer_id: customer::Id,
        booked_on: CreationDate,
        travelers: Vec<Traveler>,
        num_seats: package::NumSeats,
        amount_due: Money,
    ) -> Self {
        Self {
            id,
            package_id,
            customer_id,
            booked_on,
            travelers,
            num_seats,
            status: Status::Pending,
            amount_due,
            paid_amount: Money::ZERO,
            payment_ids: Vec::new(),
        }
    }

    /// Returns the [`Traveler`]s of this [`Booking`].
    #[must_use]
    pub fn travelers(&self) -> &[Traveler] {
        &self.travelers
    }

    /// Returns the number of seats this [`Booking`] holds.
    #[must_use]
    pub fn num_seats(&self) -> package::NumSeats {
        self.num_seats
    }

    /// Returns the current [`Status`] of this [`Booking`].
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the amount to be paid for this [`Booking`].
    #[must_use]
    pub fn amount_due(&self) -> Money {
        self.amount_due
    }

    /// Returns the total amount paid for this [`Booking`] so far.
    #[must_use]
    pub fn paid_amount(&self) -> Money {
        self.paid_amount
    }

    /// Returns the amount still to be paid for this [`Booking`].
    ///
    /// Zero once this [`Booking`] is paid in full.
    #[must_use]
    pub fn remaining_due(&self) -> Money {
        if self.is_paid_in_full() {
            Money::ZERO
        } else {
            self.amount_due - self.paid_amount
        }
    }

    /// Indicates whether the paid amount covers the amount due.
    #[must_use]
    pub fn is_paid_in_full(&self) -> bool {
        self.paid_amount >= self.amount_due
    }

    /// Returns IDs of [`Payment`]s recorded for this [`Booking`].
    #[must_use]
    pub fn payment_ids(&self) -> &[payment::Id] {
        &self.payment_ids
    }

    /// Accounts the provided [`Payment`] in this [`Booking`].
    ///
    /// [`None`] is returned if the paid amount overflows, leaving this
    /// [`Booking`] untouched.
    #[must_use]
    pub(crate) fn add_payment(
        &mut self,
        id: payment::Id,
        amount: Money,
    ) -> Option<()> {
        self.paid_amount = self.paid_amount.checked_add(amount)?;
        self.payment_ids.push(id);
        Some(())
    }

    /// Moves this [`Booking`] into the [`Status::Confirmed`] state.
    pub(crate) fn confirm(&mut self) {
        self.status = Status::Confirmed;
    }

    /// Moves this [`Booking`] into the [`Status::Cancelled`] state.
    pub(crate) fn cancel(&mut self) {
        self.status = Status::Cancelled;
    }
}

/// ID of a [`Booking`].
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct Id(u32);

define_kind! {
    #[doc = "Lifecycle status of a [`Booking`]."]
    enum Status {
        #[doc = "Seats are requested, but not committed yet."]
        Pending = 1,

        #[doc = "Paid in full with seats committed."]
        Confirmed = 2,

        #[doc = "Cancelled. Terminal."]
        Cancelled = 3,
    }
}

/// [`Date`] when a [`Booking`] was made.
///
/// [`Date`]: common::Date
pub type CreationDate = DateOf<(Booking, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::{Date, Money};
    use rust_decimal::Decimal;

    use crate::domain::{customer, package, payment};

    use super::{Booking, Id, Status, Traveler};

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn booking(due: &str) -> Booking {
        let traveler = Traveler {
            name: "Ann".parse().unwrap(),
            age: 30,
            passport: None,
        };
        Booking::new(
            Id::from(1),
            package::Id::from(1),
            customer::Id::from(1),
            Date::parse("2024-05-01").unwrap().coerce(),
            vec![traveler.clone(), traveler],
            2,
            money(due),
        )
    }

    #[test]
    fn starts_pending_and_unpaid() {
        let b = booking("200");

        assert_eq!(b.status(), Status::Pending);
        assert_eq!(b.paid_amount(), Money::ZERO);
        assert_eq!(b.remaining_due(), money("200"));
        assert_eq!(b.travelers().len(), usize::from(b.num_seats()));
        assert!(b.payment_ids().is_empty());
        assert!(!b.is_paid_in_full());
    }

    #[test]
    fn accumulates_payments() {
        let mut b = booking("200");

        b.add_payment(payment::Id::from(1), money("120.50")).unwrap();
        assert_eq!(b.paid_amount(), money("120.50"));
        assert_eq!(b.remaining_due(), money("79.50"));

        b.add_payment(payment::Id::from(2), money("100")).unwrap();
        assert_eq!(b.paid_amount(), money("220.50"));
        assert_eq!(b.remaining_due(), Money::ZERO);
        assert!(b.is_paid_in_full());
        assert_eq!(
            b.payment_ids(),
            &[payment::Id::from(1), payment::Id::from(2)],
        );
    }

    #[test]
    fn overflowing_payment_is_not_accounted() {
        let mut b = booking("200");
        b.add_payment(payment::Id::from(1), money("100")).unwrap();

        let res =
            b.add_payment(payment::Id::from(2), Money::from(Decimal::MAX));

        assert_eq!(res, None);
        assert_eq!(b.paid_amount(), money("100"));
        assert_eq!(b.payment_ids(), &[payment::Id::from(1)]);
    }

    #[test]
    fn status_transitions() {
        let mut b = booking("200");

        b.confirm();
        assert_eq!(b.status(), Status::Confirmed);

        b.cancel();
        assert_eq!(b.status(), Status::Cancelled);
    }

    #[test]
    fn status_display() {
        assert_eq!(Status::Pending.to_string(), "PENDING");
        assert_eq!(Status::Confirmed.to_string(), "CONFIRMED");
        assert_eq!(Status::Cancelled.to_string(), "CANCELLED");
        assert_eq!("CANCELLED".parse::<Status>().unwrap(), Status::Cancelled);
    }
}
