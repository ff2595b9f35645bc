//! [`Command`] for creating a new [`Booking`].

use common::operations::{Allocate, By, Insert, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, customer, package, Booking, Customer, TourPackage},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Booking`].
///
/// Seats of the [`TourPackage`] are only checked here, not taken: they are
/// committed once the [`Booking`] is paid in full.
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// ID of the [`Customer`] making a new [`Booking`].
    pub customer_id: customer::Id,

    /// ID of the [`TourPackage`] to book.
    pub package_id: package::Id,

    /// [`booking::Traveler`]s to book seats for, one seat each.
    pub travelers: Vec<booking::Traveler>,

    /// Date when a new [`Booking`] is made.
    pub booked_on: booking::CreationDate,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<
            Select<By<Option<Customer>, customer::Id>>,
            Ok = Option<Customer>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<TourPackage>, package::Id>>,
            Ok = Option<TourPackage>,
            Err = Traced<database::Error>,
        > + Database<
            Allocate<booking::Id>,
            Ok = booking::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            customer_id,
            package_id,
            travelers,
            booked_on,
        } = cmd;

        self.database()
            .execute(Select(By::<Option<Customer>, _>::new(customer_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::CustomerNotFound(customer_id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        let package = self
            .database()
            .execute(Select(By::<Option<TourPackage>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotFound(package_id))
            .map_err(tracerr::wrap!())?;

        if travelers.is_empty() {
            return Err(tracerr::new!(E::InvalidSeatCount));
        }
        let available = package.available_seats();
        let num_seats = package::NumSeats::try_from(travelers.len())
            .ok()
            .filter(|n| *n <= available)
            .ok_or(E::InsufficientSeats {
                package_id,
                requested: travelers.len(),
                available,
            })
            .map_err(tracerr::wrap!())?;

        let amount_due = package
            .price
            .checked_mul(num_seats)
            .ok_or(E::AmountOverflow)
            .map_err(tracerr::wrap!())?;

        let id = self
            .database()
            .execute(Allocate::new())
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let booking = Booking::new(
            id,
            package_id,
            customer_id,
            booked_on,
            travelers,
            num_seats,
            amount_due,
        );

        self.database()
            .execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::debug!(
            "`Booking(id: {id})` of {num_seats} seats in \
             `TourPackage(id: {package_id})` created, {amount_due} due",
        );

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Amount due of a new [`Booking`] cannot be represented.
    #[display("`Booking` amount due overflows")]
    AmountOverflow,

    /// [`Customer`] with the provided ID does not exist.
    #[display("`Customer(id: {_0})` does not exist")]
    CustomerNotFound(#[error(not(source))] customer::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`TourPackage`] doesn't have enough seats available.
    #[display(
        "`TourPackage(id: {package_id})` has {available} seats available, \
         but {requested} requested"
    )]
    InsufficientSeats {
        /// ID of the requested [`TourPackage`].
        package_id: package::Id,

        /// Number of requested seats.
        requested: usize,

        /// Number of seats available at the moment.
        available: package::NumSeats,
    },

    /// No [`booking::Traveler`]s provided.
    #[display("`Booking` must have at least one traveler")]
    InvalidSeatCount,

    /// [`TourPackage`] with the provided ID does not exist.
    #[display("`TourPackage(id: {_0})` does not exist")]
    PackageNotFound(#[error(not(source))] package::Id),
}
