//! [`TourPackage`] definitions.

pub mod itinerary;

use common::{define_text, unit, DateOf, Money};
use derive_more::{Display, From, FromStr, Into};

pub use self::itinerary::ItineraryItem;

/// Sellable tour product with a fixed seat capacity and a date range.
#[derive(Clone, Debug)]
pub struct TourPackage {
    /// ID of this [`TourPackage`].
    pub id: Id,

    /// [`Name`] of this [`TourPackage`].
    pub name: Name,

    /// [`Description`] of this [`TourPackage`].
    pub description: Description,

    /// [`Date`] when this [`TourPackage`] starts.
    ///
    /// [`Date`]: common::Date
    pub starts_on: StartDate,

    /// [`Date`] when this [`TourPackage`] ends.
    ///
    /// [`Date`]: common::Date
    pub ends_on: EndDate,

    /// Price of a single seat in this [`TourPackage`].
    pub price: Money,

    /// Total capacity of this [`TourPackage`].
    total_seats: NumSeats,

    /// Number of seats not yet committed to confirmed bookings.
    available_seats: NumSeats,

    /// Ordered program of this [`TourPackage`].
    itinerary: Vec<ItineraryItem>,
}

impl TourPackage {
    /// Creates a new [`TourPackage`] with all of its seats available and an
    /// empty itinerary.
    #[must_use]
    pub(crate) fn new(
        id: Id,
        name: Name,
        description: Description,
        starts_on: StartDate,
        ends_on: EndDate,
        price: Money,
        total_seats: NumSeats,
    ) -> Self {
        Self {
            id,
            name,
            description,
            starts_on,
            ends_on,
            price,
            total_seats,
            available_seats: total_seats,
            itinerary: Vec::new(),
        }
    }

    /// Returns the total capacity of this [`TourPackage`].
    #[must_use]
    pub fn total_seats(&self) -> NumSeats {
        self.total_seats
    }

    /// Returns the number of seats still available in this [`TourPackage`].
    #[must_use]
    pub fn available_seats(&self) -> NumSeats {
        self.available_seats
    }

    /// Returns the [`ItineraryItem`]s of this [`TourPackage`] in the order
    /// they were added.
    #[must_use]
    pub fn itinerary(&self) -> &[ItineraryItem] {
        &self.itinerary
    }

    /// Takes `n` seats out of the available ones.
    ///
    /// No bounds checking is done here: the caller must ensure that at least
    /// `n` seats are available.
    pub(crate) fn decrease_seats(&mut self, n: NumSeats) {
        self.available_seats -= n;
    }

    /// Returns `n` previously taken seats back to the available ones.
    ///
    /// No bounds checking is done here: the caller must ensure that these
    /// seats were taken before.
    pub(crate) fn increase_seats(&mut self, n: NumSeats) {
        self.available_seats += n;
    }

    /// Appends the provided [`ItineraryItem`] to the itinerary.
    pub(crate) fn push_itinerary_item(&mut self, item: ItineraryItem) {
        self.itinerary.push(item);
    }
}

/// ID of a [`TourPackage`].
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

define_text! {
    #[doc = "Name of a [`TourPackage`]."]
    struct Name(max_len = 256);
}

define_text! {
    #[doc = "Description of a [`TourPackage`]."]
    struct Description(max_len = 4096);
}

/// Number of seats in a [`TourPackage`].
pub type NumSeats = u16;

/// [`Date`] when a [`TourPackage`] starts.
///
/// [`Date`]: common::Date
pub type StartDate = DateOf<(TourPackage, unit::Start)>;

/// [`Date`] when a [`TourPackage`] ends.
///
/// [`Date`]: common::Date
pub type EndDate = DateOf<(TourPackage, unit::End)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{Description, Id, Name, TourPackage};

    fn package(seats: u16) -> TourPackage {
        let start = Date::parse("2024-07-01").unwrap();
        TourPackage::new(
            Id::from(1),
            Name::new("Alps").unwrap(),
            Description::new("Hiking week").unwrap(),
            start.coerce(),
            start.coerce(),
            "100".parse().unwrap(),
            seats,
        )
    }

    #[test]
    fn starts_fully_available() {
        let p = package(10);

        assert_eq!(p.total_seats(), 10);
        assert_eq!(p.available_seats(), 10);
        assert!(p.itinerary().is_empty());
    }

    #[test]
    fn moves_seats_back_and_forth() {
        let mut p = package(10);

        p.decrease_seats(3);
        assert_eq!(p.available_seats(), 7);

        p.decrease_seats(7);
        assert_eq!(p.available_seats(), 0);

        p.increase_seats(3);
        assert_eq!(p.available_seats(), 3);
        assert_eq!(p.total_seats(), 10);
    }

    #[test]
    fn validates_texts() {
        assert!(Name::new("Alps").is_some());
        assert!(Name::new("").is_none());
        assert!(Name::new(" Alps").is_none());
        assert!(Name::new("x".repeat(257)).is_none());
        assert!(Description::new("y".repeat(4096)).is_some());
    }
}
