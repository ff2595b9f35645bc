//! [`Table`] definitions.

use std::collections::BTreeMap;

use crate::domain::{
    booking, cancellation, customer, package, package::itinerary, payment,
    Booking, Cancellation, Customer, Payment, TourPackage,
};

/// Entity stored in its own table of [`Tables`].
pub trait Table: Clone {
    /// Type of the ID this [`Table`] is keyed by.
    type Id: Copy + Ord + Into<u32>;

    /// Name of this [`Table`], used for locking.
    const NAME: &'static str;

    /// Returns the ID of this row.
    fn id(&self) -> Self::Id;

    /// Returns rows of this [`Table`] out of the provided [`Tables`].
    fn rows(tables: &Tables) -> &BTreeMap<Self::Id, Self>;

    /// Returns mutable rows of this [`Table`] out of the provided [`Tables`].
    fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<Self::Id, Self>;
}

/// ID allocated from a monotonic sequence.
pub trait Sequenced: From<u32> {
    /// Name of the sequence.
    const SEQUENCE: &'static str;
}

/// Set of all the in-memory tables.
#[derive(Debug, Default)]
pub struct Tables {
    /// [`TourPackage`]s with their itineraries.
    packages: BTreeMap<package::Id, TourPackage>,

    /// [`Customer`]s.
    customers: BTreeMap<customer::Id, Customer>,

    /// [`Booking`]s.
    bookings: BTreeMap<booking::Id, Booking>,

    /// [`Payment`]s.
    payments: BTreeMap<payment::Id, Payment>,

    /// [`Cancellation`]s.
    cancellations: BTreeMap<cancellation::Id, Cancellation>,
}

impl Tables {
    /// Moves all the rows of `other` into these [`Tables`], overwriting the
    /// existing ones with the same IDs.
    pub(crate) fn merge(&mut self, other: Self) {
        let Self {
            packages,
            customers,
            bookings,
            payments,
            cancellations,
        } = other;

        self.packages.extend(packages);
        self.customers.extend(customers);
        self.bookings.extend(bookings);
        self.payments.extend(payments);
        self.cancellations.extend(cancellations);
    }
}

/// Implements [`Table`] for the provided entity.
macro_rules! impl_table {
    ($entity:ty, $id:ty, $field:ident) => {
        impl Table for $entity {
            type Id = $id;

            const NAME: &'static str = ::core::stringify!($entity);

            fn id(&self) -> Self::Id {
                self.id
            }

            fn rows(tables: &Tables) -> &BTreeMap<Self::Id, Self> {
                &tables.$field
            }

            fn rows_mut(tables: &mut Tables) -> &mut BTreeMap<Self::Id, Self> {
                &mut tables.$field
            }
        }

        impl Sequenced for $id {
            const SEQUENCE: &'static str = ::core::stringify!($entity);
        }
    };
}

impl_table!(TourPackage, package::Id, packages);
impl_table!(Customer, customer::Id, customers);
impl_table!(Booking, booking::Id, bookings);
impl_table!(Payment, payment::Id, payments);
impl_table!(Cancellation, cancellation::Id, cancellations);

impl Sequenced for itinerary::Id {
    const SEQUENCE: &'static str = "ItineraryItem";
}
