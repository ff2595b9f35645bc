//! [`Command`] definition.

pub mod add_itinerary_item;
pub mod cancel_booking;
pub mod create_booking;
pub mod create_customer;
pub mod create_tour_package;
pub mod record_payment;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_itinerary_item::AddItineraryItem, cancel_booking::CancelBooking,
    create_booking::CreateBooking, create_customer::CreateCustomer,
    create_tour_package::CreateTourPackage, record_payment::RecordPayment,
};
