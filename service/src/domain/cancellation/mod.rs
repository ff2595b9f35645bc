//! [`Cancellation`] definitions.

pub mod fee;

use common::{unit, DateOf, Money};
use derive_more::{Display, From, FromStr, Into};

use crate::domain::booking;
#[cfg(doc)]
use crate::domain::Booking;

pub use self::fee::Schedule as FeeSchedule;

/// Record of a [`Booking`] being cancelled.
#[derive(Clone, Debug)]
pub struct Cancellation {
    /// ID of this [`Cancellation`].
    pub id: Id,

    /// ID of the cancelled [`Booking`].
    pub booking_id: booking::Id,

    /// [`Date`] when the [`Booking`] was cancelled.
    ///
    /// [`Date`]: common::Date
    pub cancelled_on: CreationDate,

    /// Fee withheld from the paid amount.
    pub fee: Money,

    /// Amount returned to the customer.
    ///
    /// Together with the [`Cancellation::fee`] it makes up the whole amount
    /// paid for the [`Booking`].
    pub refund: Money,
}

/// ID of a [`Cancellation`].
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

/// [`Date`] when a [`Booking`] was cancelled.
///
/// [`Date`]: common::Date
pub type CreationDate = DateOf<(Cancellation, unit::Creation)>;
