//! Operator-facing errors of the [`Console`].
//!
//! [`Console`]: super::Console

use service::command::{
    add_itinerary_item, cancel_booking, create_booking, create_customer,
    create_tour_package, record_payment,
};

use crate::{define_error, AsError, Error};

define_error! {
    enum PackageError {
        #[code = "PACKAGE_NOT_FOUND"]
        #[message = "Package not found."]
        NotFound,

        #[code = "INVALID_DATES"]
        #[message = "End date must be after start date."]
        InvalidDates,

        #[code = "INVALID_PRICE"]
        #[message = "Price must be positive."]
        InvalidPrice,

        #[code = "INVALID_SEAT_COUNT"]
        #[message = "Total seats must be positive."]
        InvalidSeatCount,
    }
}

define_error! {
    enum CustomerError {
        #[code = "CUSTOMER_NOT_FOUND"]
        #[message = "Customer not found."]
        NotFound,
    }
}

define_error! {
    enum BookingError {
        #[code = "BOOKING_NOT_FOUND"]
        #[message = "Booking not found."]
        NotFound,

        #[code = "ALREADY_CANCELLED"]
        #[message = "Booking already cancelled."]
        AlreadyCancelled,

        #[code = "BOOKING_CANCELLED"]
        #[message = "Booking is cancelled."]
        Cancelled,

        #[code = "INVALID_SEAT_COUNT"]
        #[message = "Seats must be positive."]
        InvalidSeatCount,

        #[code = "AMOUNT_OVERFLOW"]
        #[message = "Amount due is too large."]
        AmountOverflow,
    }
}

define_error! {
    enum PaymentError {
        #[code = "INVALID_AMOUNT"]
        #[message = "Amount must be positive."]
        InvalidAmount,

        #[code = "AMOUNT_OVERFLOW"]
        #[message = "Paid amount is too large."]
        AmountOverflow,
    }
}

/// Creates a new [`Error`] about a lack of seats.
pub(super) fn insufficient_seats(available: impl ToString) -> Error {
    Error::new(
        "INSUFFICIENT_SEATS",
        format!(
            "Not enough seats available. Available: {}",
            available.to_string(),
        ),
    )
}

impl AsError for create_tour_package::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use create_tour_package::ExecutionError as E;

        match self {
            E::Db(e) => e.try_as_error(),
            E::InvalidDates { .. } => Some(PackageError::InvalidDates.into()),
            E::InvalidPrice(_) => Some(PackageError::InvalidPrice.into()),
            E::InvalidSeatCount => Some(PackageError::InvalidSeatCount.into()),
        }
    }
}

impl AsError for add_itinerary_item::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use add_itinerary_item::ExecutionError as E;

        match self {
            E::Db(e) => e.try_as_error(),
            E::PackageNotFound(_) => Some(PackageError::NotFound.into()),
        }
    }
}

impl AsError for create_customer::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use create_customer::ExecutionError as E;

        match self {
            E::Db(e) => e.try_as_error(),
        }
    }
}

impl AsError for create_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use create_booking::ExecutionError as E;

        match self {
            E::AmountOverflow => Some(BookingError::AmountOverflow.into()),
            E::CustomerNotFound(_) => Some(CustomerError::NotFound.into()),
            E::Db(e) => e.try_as_error(),
            E::InsufficientSeats { available, .. } => {
                Some(insufficient_seats(available))
            }
            E::InvalidSeatCount => Some(BookingError::InvalidSeatCount.into()),
            E::PackageNotFound(_) => Some(PackageError::NotFound.into()),
        }
    }
}

impl AsError for record_payment::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use record_payment::ExecutionError as E;

        match self {
            E::AmountOverflow(_) => Some(PaymentError::AmountOverflow.into()),
            E::BookingCancelled(_) => Some(BookingError::Cancelled.into()),
            E::BookingNotFound(_) => Some(BookingError::NotFound.into()),
            E::Db(e) => e.try_as_error(),
            E::InvalidAmount(_) => Some(PaymentError::InvalidAmount.into()),
            E::PackageNotFound(_) => Some(PackageError::NotFound.into()),
        }
    }
}

impl AsError for cancel_booking::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        use cancel_booking::ExecutionError as E;

        match self {
            E::AlreadyCancelled(_) => {
                Some(BookingError::AlreadyCancelled.into())
            }
            E::BookingNotFound(_) => Some(BookingError::NotFound.into()),
            E::Db(e) => e.try_as_error(),
            E::PackageNotFound(_) => Some(PackageError::NotFound.into()),
        }
    }
}

#[cfg(test)]
mod spec {
    use service::{
        command::{cancel_booking, create_booking},
        domain::{booking, package},
    };

    use crate::AsError as _;

    #[test]
    fn insufficient_seats_shows_availability() {
        let err = create_booking::ExecutionError::InsufficientSeats {
            package_id: package::Id::from(1),
            requested: 5,
            available: 2,
        }
        .as_error();

        assert_eq!(err.code, "INSUFFICIENT_SEATS");
        assert_eq!(err.message, "Not enough seats available. Available: 2");
    }

    #[test]
    fn traced_error_keeps_code() {
        use cancel_booking::ExecutionError as E;

        let err =
            tracerr::new!(E::AlreadyCancelled(booking::Id::from(1))).as_error();

        assert_eq!(err.code, "ALREADY_CANCELLED");
        assert_eq!(err.message, "Booking already cancelled.");
        assert!(err.backtrace.is_some());
    }
}
