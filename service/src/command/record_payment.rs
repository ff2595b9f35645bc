//! [`Command`] for recording a [`Payment`] towards a [`Booking`].

use common::{
    operations::{
        Allocate, By, Commit, Insert, Lock, Select, Transact, Transacted,
        Update,
    },
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, package, payment, Booking, Payment, TourPackage},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for recording a [`Payment`] towards a [`Booking`].
///
/// The [`Payment`] which makes a [`Status::Pending`] [`Booking`] paid in full
/// commits its seats in the [`TourPackage`] and confirms it. If there are not
/// enough seats left at that moment, the [`Payment`] is still accepted, but
/// the [`Booking`] stays pending ([`Outcome::Oversold`]).
///
/// [`Status::Pending`]: booking::Status::Pending
#[derive(Clone, Debug)]
pub struct RecordPayment {
    /// ID of the [`Booking`] to pay for.
    pub booking_id: booking::Id,

    /// Paid amount.
    pub amount: Money,

    /// Method of a new [`Payment`].
    pub method: payment::Method,

    /// Date when a new [`Payment`] is received.
    pub paid_on: payment::CreationDate,
}

/// Result of [`RecordPayment`] [`Command`] execution.
#[derive(Clone, Debug)]
pub struct Output {
    /// Recorded [`Payment`].
    pub payment: Payment,

    /// [`Booking`] after the [`Payment`] is accounted.
    pub booking: Booking,

    /// What the [`Payment`] resulted in.
    pub outcome: Outcome,
}

/// Effect of a recorded [`Payment`] on its [`Booking`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// [`Booking`] became paid in full and its seats were committed.
    Confirmed,

    /// [`Booking`] is not paid in full yet.
    Pending {
        /// Amount still to be paid.
        remaining: Money,
    },

    /// [`Booking`] is paid in full, but its [`TourPackage`] has not enough
    /// seats available, so it stays pending.
    Oversold,

    /// [`Booking`] was confirmed before, so nothing changed besides the paid
    /// amount.
    AlreadyConfirmed,
}

impl<Db> Command<RecordPayment> for Service<Db>
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
            Allocate<payment::Id>,
            Ok = payment::Id,
            Err = Traced<database::Error>,
        > + Database<Insert<Payment>, Err = Traced<database::Error>>
        + Database<Update<Booking>, Err = Traced<database::Error>>
        + Database<Update<TourPackage>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: RecordPayment,
    ) -> Result<Self::Ok, Self::Err> {
        use booking::Status as S;
        use ExecutionError as E;

        let RecordPayment {
            booking_id,
            amount,
            method,
            paid_on,
        } = cmd;

        let booking = self
            .database()
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotFound(booking_id))
            .map_err(tracerr::wrap!())?;
        if !amount.is_positive() {
            return Err(tracerr::new!(E::InvalidAmount(amount)));
        }
        if booking.status() == S::Cancelled {
            return Err(tracerr::new!(E::BookingCancelled(booking_id)));
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

        let payment = Payment {
            id: tx
                .execute(Allocate::new())
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            booking_id,
            amount,
            paid_on,
            method,
        };
        booking
            .add_payment(payment.id, amount)
            .ok_or(E::AmountOverflow(booking_id))
            .map_err(tracerr::wrap!())?;

        let outcome = match booking.status() {
            // Might be cancelled while waiting for the lock.
            S::Cancelled => {
                return Err(tracerr::new!(E::BookingCancelled(booking_id)));
            }
            S::Confirmed => Outcome::AlreadyConfirmed,
            S::Pending if !booking.is_paid_in_full() => Outcome::Pending {
                remaining: booking.remaining_due(),
            },
            S::Pending if package.available_seats() < booking.num_seats() => {
                Outcome::Oversold
            }
            S::Pending => {
                package.decrease_seats(booking.num_seats());
                booking.confirm();
                Outcome::Confirmed
            }
        };

        tx.execute(Insert(payment.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        tx.execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;
        if outcome == Outcome::Confirmed {
            tx.execute(Update(package.clone()))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))
                .map(drop)?;
        }
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        match outcome {
            Outcome::Confirmed => log::info!(
                "`Booking(id: {booking_id})` confirmed, {} seats committed in \
                 `TourPackage(id: {})`, {} left",
                booking.num_seats(),
                package.id,
                package.available_seats(),
            ),
            Outcome::Oversold => log::warn!(
                "`Booking(id: {booking_id})` is paid in full, but \
                 `TourPackage(id: {})` has only {} of {} seats available",
                package.id,
                package.available_seats(),
                booking.num_seats(),
            ),
            Outcome::Pending { .. } | Outcome::AlreadyConfirmed => {}
        }

        Ok(Output {
            payment,
            booking,
            outcome,
        })
    }
}

/// Error of [`RecordPayment`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Paid amount of the [`Booking`] cannot be represented.
    #[display("`Booking(id: {_0})` paid amount overflows")]
    AmountOverflow(#[error(not(source))] booking::Id),

    /// [`Booking`] is cancelled.
    #[display("`Booking(id: {_0})` is cancelled")]
    BookingCancelled(#[error(not(source))] booking::Id),

    /// [`Booking`] with the provided ID does not exist.
    #[display("`Booking(id: {_0})` does not exist")]
    BookingNotFound(#[error(not(source))] booking::Id),

    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// Paid amount is not positive.
    #[display("`Payment` amount must be positive, got {_0}")]
    InvalidAmount(#[error(not(source))] Money),

    /// [`TourPackage`] of the [`Booking`] does not exist.
    #[display("`TourPackage(id: {_0})` does not exist")]
    PackageNotFound(#[error(not(source))] package::Id),
}
