//! Domain definitions.

pub mod booking;
pub mod cancellation;
pub mod customer;
pub mod package;
pub mod payment;

pub use self::{
    booking::Booking,
    cancellation::Cancellation,
    customer::Customer,
    package::{ItineraryItem, TourPackage},
    payment::Payment,
};
