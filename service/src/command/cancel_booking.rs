//! [`Command`] for cancelling a [`Booking`].

use common::operations::{
    Allocate, By, Commit, Insert, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking, cancellation, package, Booking, Cancellation, TourPackage,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a [`Booking`].
///
/// A fee is withheld from the paid amount according to the configured
/// [`cancellation::FeeSchedule`], and the rest is refunded. Seats of a
/// confirmed [`Booking`] are returned to its [`TourPackage`].
#[derive(Clone, Copy, Debug)]
pub struct CancelBooking {
    /// ID of the [`Booking`] to cancel.
    pub booking_id: booking::Id,

    /// Date when the [`Booking`] is cancelled.
    pub cancelled_on: cancellation::CreationDate,
}

impl<Db> Command<CancelBooking> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>
        + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        >,
    Transacted<Db>: Database<
            Lock<By<Booking, booking::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<TourPackage, package::Id>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<TourPackage>, package::Id>>,
            Ok = Option<TourPackage>,
            Err = Traced<database::Error>,
        > + Database<
            Allocate<cancellation::Id>,
            Ok = cancellation::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<Cancellation>, Err = Traced<database::Error>>
        + Database<Update<Booking>, Err = Traced<database::Error>>
        + Database<Update<TourPackage>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Cancellation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CancelBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use booking::Status as S;
        use ExecutionError as E;

        let CancelBooking {
            booking_id,
            cancelled_on,
        } = cmd;

        let booking = self
            .database()
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotFound(booking_id))
            .map_err(tracerr::wrap!())?;
        if booking.status() == S::Cancelled {
            return Err(tracerr::new!(E::AlreadyCancelled(booking_id)));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Always `Booking` first, then `TourPackage`, to avoid deadlocks.
        tx.execute(Lock(By::<Booking, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Lock(By::<TourPackage, _>::new(booking.package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let mut booking = tx
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotFound(booking_id))
            .map_err(tracerr::wrap!())?;
        let mut package = tx
            .execute(Select(By::<Option<TourPackage>, _>::new(
                booking.package_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotFound(booking.package_id))
            .map_err(tracerr::wrap!())?;

        match booking.status() {
            // Might be cancelled while waiting for the lock.
            S::Cancelled => {
                return Err(tracerr::new!(E::AlreadyCancelled(booking_id)));
            }
            S::Confirmed => {
                package.increase_seats(booking.num_seats());
                tx.execute(Update(package.clone()))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))
                    .map(drop)?;
            }
            S::Pending => {}
        }

        let days_before = cancelled_on.days_until(package.starts_on);
        let charges = self
            .config()
            .fee_schedule
            .charges(days_before, booking.paid_amount());
        let cancellation = Cancellation {
            id: tx
                .execute(Allocate::new())
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            booking_id,
            cancelled_on,
            fee: charges.fee,
            refund: charges.refund,
        };
        tx.execute(Insert(cancellation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        booking.cancel();
        tx.execute(Update(booking))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            "`Booking(id: {booking_id})` cancelled {days_before} days before \
             departure: fee {}, refund {}, `TourPackage(id: {})` has {} seats \
             available",
            cancellation.fee,
            cancellation.refund,
            package.id,
            package.available_seats(),
        );

        Ok(cancellation)
    }
}

/// Error of [`CancelBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Booking`] is cancelled already.
    #[display("`Booking(id: {_0})` is already cancelled")]
    AlreadyCancelled(#[error(not(source))] booking::Id),

    /// [`Booking`] with the provided ID does not exist.
    #[display("`Booking(id: {_0})` does not exist")]
    BookingNotFound(#[error(not(source))] booking::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`TourPackage`] of the [`Booking`] does not exist.
    #[display("`TourPackage(id: {_0})` does not exist")]
    PackageNotFound(#[error(not(source))] package::Id),
}
